//! Host atom-query seam

use lin_alg::f64::Vec3;

use crate::{HostError, StateScope};

/// A read-only view of one host atom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomSample {
    /// Atom position in the requested state
    pub position: Vec3,
    /// Atomic mass
    pub mass: f64,
}

impl AtomSample {
    pub fn new(position: Vec3, mass: f64) -> Self {
        Self { position, mass }
    }
}

/// Axis-aligned bounding region (min, max corners)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Vec3,
    pub max: Vec3,
}

impl Extent {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Compute the extent of a set of points, `None` if there are none
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min, mut max) = (first, first);

        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some(Self { min, max })
    }

    /// Grow the extent outward by `padding` on every side
    pub fn padded(&self, padding: f64) -> Self {
        let pad = Vec3::new(padding, padding, padding);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Width along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Host-side atom queries
///
/// The host resolves selection expressions; the geometry functions only see
/// the atoms and extents it reports. State indices are 1-based.
pub trait AtomSource {
    /// Axis-aligned extent of the selection
    fn extent(&self, selection: &str, scope: StateScope) -> Result<Extent, HostError>;

    /// Atoms of the selection with their positions in the given scope
    fn atoms(&self, selection: &str, scope: StateScope) -> Result<Vec<AtomSample>, HostError>;

    /// Number of states defined by the host
    fn count_states(&self) -> usize;

    /// The host's current state (1-based)
    fn current_state(&self) -> usize;
}
