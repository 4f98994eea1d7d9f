//! pymol-sketch Color System
//!
//! This crate provides the color and literal-vector handling for pymol-sketch:
//! - [`Color`] RGB values in the `[0.0, 1.0]` range
//! - [`NamedColors`], PyMOL's built-in named color palette
//! - [`ColorLookup`], the seam through which a host exposes its color table
//! - Text parsing of numeric vectors and color specifications

mod color;
mod error;
mod named;
mod parse;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use named::{ColorLookup, NamedColors};
pub use parse::{parse_vec3, parse_vector, resolve_color, ColorSpec};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Color, ColorLookup, ColorSpec, NamedColors};
}
