//! Host capability trait
//!
//! Commands run against `dyn HostLike`, so any host that can answer atom
//! queries, resolve color names and load CGOs can drive them.

use lin_alg::f64::Vec3;
use sketch_cgo::CgoSink;
use sketch_color::ColorLookup;
use sketch_geom::{AtomSource, HostError};

/// Everything a sketch command needs from its host
pub trait HostLike: AtomSource + ColorLookup + CgoSink {
    /// Turn arbitrary text (usually a selection) into a valid object name
    fn legal_name(&self, text: &str) -> Result<String, HostError>;

    /// Create or update a single-atom object at `position`
    ///
    /// `state` is 1-based; 0 appends a new state.
    fn pseudoatom(&mut self, name: &str, position: Vec3, state: usize) -> Result<(), HostError>;
}
