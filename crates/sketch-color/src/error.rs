//! Error types for the color system

use thiserror::Error;

/// Result type for color and vector parsing
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors that can occur when working with colors and literal vectors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// No numeric run could be found in the text
    #[error("A value requires to be like (0, 1, ...): '{0}'")]
    Parse(String),

    /// A numeric run was found but had the wrong number of components
    #[error("Expected {expected} components, got {got} in '{text}'")]
    Arity {
        text: String,
        expected: usize,
        got: usize,
    },
}
