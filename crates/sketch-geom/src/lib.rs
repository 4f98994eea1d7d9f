//! Selection geometry for pymol-sketch
//!
//! This crate computes geometric summaries of an atom selection:
//! - Center of coordinates (midpoint of the axis-aligned extent)
//! - Center of mass (mean of atom positions)
//! - Bounding box, as dimensions or as the eight corner vertices
//! - Radius of gyration, optionally mass-weighted
//!
//! Atoms and extents come from the host through the [`AtomSource`] trait.
//! States are given as a [`State`] and resolved to a [`StateScope`] before
//! any per-frame host query is made.

mod bbox;
mod center;
mod error;
mod gyration;
mod source;
mod state;

pub use bbox::{bounding_box, find_bounding_box, BoundingBox, BoxLayout, BoxOutput};
pub use center::{center_of_coordinates, center_of_mass};
pub use error::{GeomError, GeomResult, HostError};
pub use gyration::{gyration, radius_of_gyration, Gyration};
pub use source::{AtomSample, AtomSource, Extent};
pub use state::{State, StateScope};
