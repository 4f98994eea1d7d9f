//! Bounding boxes
//!
//! Vertex numbering used by [`BoundingBox::vertices`]:
//!
//! ```text
//!              5-----6
//!             /|    /|
//! y  z       / 8-- / 7
//! | /       1-----2 /
//! |/        |/    |/
//! -----x    4-----3
//! ```
//!
//! Front face 1-2-3-4 lies at min z, back face 5-6-7-8 at max z. Line
//! renderers rely on this order.

use lin_alg::f64::Vec3;

use crate::{AtomSource, Extent, GeomResult, State};

/// Padded axis-aligned bounding box of a selection
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

/// Which form [`find_bounding_box`] reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxLayout {
    /// `(minx, miny, minz, width_x, width_y, width_z)`
    #[default]
    Dimensions,
    /// The eight corner vertices
    Vertices,
}

/// A bounding box in the requested layout
#[derive(Debug, Clone, Copy)]
pub enum BoxOutput {
    Dimensions([f64; 6]),
    Vertices([Vec3; 8]),
}

impl BoundingBox {
    pub fn from_extent(extent: Extent) -> Self {
        Self {
            min: extent.min,
            max: extent.max,
        }
    }

    /// Minimum corner followed by the width along each axis
    pub fn dimensions(&self) -> [f64; 6] {
        let (min, max) = (self.min, self.max);
        [
            min.x,
            min.y,
            min.z,
            max.x - min.x,
            max.y - min.y,
            max.z - min.z,
        ]
    }

    /// Corner vertices in the fixed 1..8 order
    pub fn vertices(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, min.y, max.z),
        ]
    }

    pub fn layout(&self, layout: BoxLayout) -> BoxOutput {
        match layout {
            BoxLayout::Dimensions => BoxOutput::Dimensions(self.dimensions()),
            BoxLayout::Vertices => BoxOutput::Vertices(self.vertices()),
        }
    }
}

/// Bounding box of the selection, grown outward by `padding` on every axis
pub fn bounding_box<S: AtomSource + ?Sized>(
    source: &S,
    selection: &str,
    state: State,
    padding: f64,
) -> GeomResult<BoundingBox> {
    let extent = source.extent(selection, state.resolve(source))?;
    Ok(BoundingBox::from_extent(extent.padded(padding)))
}

/// Bounding box of the selection in the requested layout
pub fn find_bounding_box<S: AtomSource + ?Sized>(
    source: &S,
    selection: &str,
    state: State,
    padding: f64,
    layout: BoxLayout,
) -> GeomResult<BoxOutput> {
    bounding_box(source, selection, state, padding).map(|bbox| bbox.layout(layout))
}
