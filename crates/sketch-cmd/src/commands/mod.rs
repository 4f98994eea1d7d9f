//! Command implementations
//!
//! Every command exists twice: as a plain function taking a typed argument
//! struct (`sphere::sketch_scom(host, &SphereArgs)`) and as a [`Command`]
//! registered under its PyMOL name.
//!
//! [`Command`]: crate::command::Command

pub mod arrow;
pub mod bbox;
pub mod gyration;
pub mod pseudoatom;
pub mod sphere;

use lin_alg::f64::Vec3;
use sketch_cgo::{render, render_states, Cgo, RenderOptions};
use sketch_geom::{center_of_coordinates, center_of_mass, AtomSource, GeomError, GeomResult, State};
use sketch_scene::HostLike;

use crate::command::CommandRegistry;
use crate::error::CmdResult;

/// Register all sketch commands with the registry
pub fn register_all(registry: &mut CommandRegistry) {
    pseudoatom::register(registry);
    sphere::register(registry);
    bbox::register(registry);
    gyration::register(registry);
    arrow::register(registry);
}

/// Which center of a selection a command marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterKind {
    /// Midpoint of the extent
    Coordinates,
    /// Mean atom position
    Mass,
}

impl CenterKind {
    pub fn compute<S: AtomSource + ?Sized>(
        self,
        source: &S,
        selection: &str,
        state: State,
    ) -> GeomResult<Vec3> {
        match self {
            CenterKind::Coordinates => center_of_coordinates(source, selection, state),
            CenterKind::Mass => center_of_mass(source, selection, state),
        }
    }

    /// Summary line label
    pub fn label(self) -> &'static str {
        match self {
            CenterKind::Coordinates => "Center of coordinate",
            CenterKind::Mass => "Center of mass",
        }
    }
}

/// Result of a sketch command
#[derive(Debug, Clone)]
pub struct Sketch<T> {
    /// Name of the object created or updated
    pub name: String,
    /// One value per host state it was computed in
    pub results: Vec<(usize, T)>,
}

impl<T> Sketch<T> {
    /// Values in state order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.results.iter().map(|(_, v)| v)
    }

    /// The first (for a single-state request, the only) value
    pub fn first(&self) -> Option<&T> {
        self.values().next()
    }
}

/// Format a point for a summary line
pub(crate) fn format_point(label: &str, p: Vec3) -> String {
    format!("{}: {:.3}, {:.3}, {:.3}", label, p.x, p.y, p.z)
}

/// Evaluate `f` once per state covered by `state`
///
/// `All` expands to every host state; a host without states yields an
/// empty-selection error rather than an empty result.
pub(crate) fn per_state<H, T>(
    host: &H,
    selection: &str,
    state: State,
    mut f: impl FnMut(State) -> GeomResult<T>,
) -> CmdResult<Vec<(usize, T)>>
where
    H: HostLike + ?Sized,
{
    let states = state.expand(host);
    if states.is_empty() {
        return Err(GeomError::EmptySelection(selection.to_string()).into());
    }

    let mut results = Vec::with_capacity(states.len());
    for s in states {
        results.push((s, f(State::Specific(s))?));
    }
    Ok(results)
}

/// Load per-state streams under one object
///
/// A single-state request loads one stream at the next free state of a fresh
/// object; `All` loads one CGO state per host state.
pub(crate) fn load_frames<H: HostLike + ?Sized>(
    host: &mut H,
    state: State,
    frames: &[(usize, Cgo)],
    options: &RenderOptions,
) -> CmdResult<String> {
    let name = match frames {
        [(_, cgo)] if state != State::All => render(host, cgo, options)?,
        _ => render_states(host, frames, options)?,
    };
    Ok(name)
}

/// Render options from the common `name` / `prefix` / `alpha` arguments
pub(crate) fn render_options(name: Option<&str>, prefix: &str, alpha: f32) -> RenderOptions {
    let options = RenderOptions::new().with_prefix(prefix).with_alpha(alpha);
    match name {
        Some(name) => options.with_name(name),
        None => options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_scene::{Molecule, Session};

    #[test]
    fn test_register_all() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        assert_eq!(
            registry.names(),
            vec![
                "sketch_arrow",
                "sketch_bbox",
                "sketch_pcoc",
                "sketch_pcom",
                "sketch_rgyr",
                "sketch_scoc",
                "sketch_scom",
            ]
        );
    }

    #[test]
    fn test_format_point() {
        assert_eq!(
            format_point("Center of mass", Vec3::new(1.0, -0.5, 2.0 / 3.0)),
            "Center of mass: 1.000, -0.500, 0.667"
        );
    }

    #[test]
    fn test_per_state_without_states() {
        let session = Session::new();
        let result = per_state(&session, "all", State::All, |_| Ok(()));
        assert!(result.is_err());
    }

    #[test]
    fn test_per_state_expands_all() {
        let mut session = Session::new();
        let mut mol = Molecule::from_atoms("m", [("C", 12.0, Vec3::new(0.0, 0.0, 0.0))]);
        mol.add_state(vec![Vec3::new(1.0, 0.0, 0.0)]).unwrap();
        session.load_molecule(mol);

        let results = per_state(&session, "m", State::All, |s| {
            CenterKind::Mass.compute(&session, "m", s)
        })
        .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].0, 2);
        assert_eq!(results[1].1.x, 1.0);

        let current = per_state(&session, "m", State::Current, |s| Ok(s)).unwrap();
        assert_eq!(current, vec![(1, State::Specific(1))]);
    }
}
