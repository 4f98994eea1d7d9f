//! Error types for the command system

use sketch_cgo::CgoError;
use sketch_color::ColorError;
use sketch_geom::{GeomError, HostError};
use thiserror::Error;

/// Result type for command operations
pub type CmdResult<T = ()> = Result<T, CmdError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CmdError {
    /// Command parsing failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Command not found in registry
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid argument provided
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Missing required argument
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Malformed vector or color text
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Geometry could not be computed
    #[error(transparent)]
    Geometry(#[from] GeomError),

    /// Rendering failed
    #[error(transparent)]
    Cgo(#[from] CgoError),

    /// Host call failed
    #[error(transparent)]
    Host(#[from] HostError),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(String),
}

/// Errors that can occur during command parsing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Unexpected end of input
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Empty command
    #[error("empty command")]
    EmptyCommand,

    /// Generic parse error with message
    #[error("parse error: {0}")]
    Generic(String),
}

impl From<nom::Err<nom::error::Error<&str>>> for ParseError {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => ParseError::UnexpectedEof,
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                let shown: String = e.input.chars().take(20).collect();
                ParseError::Generic(format!("at '{}...'", shown))
            }
        }
    }
}

impl CmdError {
    /// Create an invalid argument error
    pub fn invalid_arg(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CmdError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CmdError::UnknownCommand("sketch_foo".to_string());
        assert_eq!(format!("{}", err), "unknown command: sketch_foo");

        let err = CmdError::invalid_arg("radius", "expected a number");
        assert_eq!(format!("{}", err), "invalid argument 'radius': expected a number");
    }

    #[test]
    fn test_wrapped_errors_are_transparent() {
        let err: CmdError = HostError::SelectionNotFound("ghost".to_string()).into();
        assert_eq!(err.to_string(), "selection not found: ghost");

        let err: CmdError = GeomError::EmptySelection("none".to_string()).into();
        assert_eq!(err.to_string(), "selection contains no atoms: none");
    }
}
