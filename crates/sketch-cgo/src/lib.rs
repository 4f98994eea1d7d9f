//! Compiled Graphics Objects (CGO) for pymol-sketch
//!
//! A CGO is PyMOL's flat float-list drawing format. This crate builds such
//! streams from a handful of shapes and loads them into a host:
//!
//! - [`CgoOp`]: one typed instruction, flattened with PyMOL's opcodes
//! - [`Cgo`]: an ordered stream, composed with `+`
//! - [`sphere`], [`cylinder`], [`cone`], [`Arrow`], [`wire_box`]: shape builders
//! - [`CgoSink`] and [`render`]: hand a stream to the host under a name
//!
//! # Example
//!
//! ```
//! use lin_alg::f64::Vec3;
//! use sketch_cgo::{cylinder, sphere};
//! use sketch_color::Color;
//!
//! let origin = Vec3::new(0.0, 0.0, 0.0);
//! let cgo = sphere(origin, 1.0, Color::RED)
//!     + cylinder(origin, Vec3::new(0.0, 0.0, 5.0), 0.2, Color::RED, Color::BLUE);
//! assert_eq!(cgo.len(), 3);
//! ```

mod cgo;
mod error;
mod op;
mod shape;
mod sink;

pub use cgo::Cgo;
pub use error::{CgoError, CgoResult};
pub use op::{opcode, CgoOp, PrimitiveMode};
pub use shape::{
    cone, cylinder, sphere, wire_box, Arrow, DEFAULT_HEAD_LENGTH_SCALE,
    DEFAULT_HEAD_RADIUS_SCALE, DEFAULT_LINE_WIDTH, MIN_ARROW_LENGTH,
};
pub use sink::{render, render_states, AutoZoomGuard, CgoSink, RenderOptions, AUTO_ZOOM};
