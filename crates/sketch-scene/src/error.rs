//! Error types for the scene crate

use sketch_geom::HostError;
use thiserror::Error;

/// Scene-related errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// Object not found in registry
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Invalid object type for operation
    #[error("Invalid object type for '{name}': expected {expected}, got {actual}")]
    InvalidObjectType {
        name: String,
        expected: String,
        actual: String,
    },

    /// Invalid state index
    #[error("Invalid state index: {index} (object has {count} states)")]
    InvalidState { index: usize, count: usize },

    /// Coordinate set does not match the atom count
    #[error("Coordinate count mismatch: expected {expected}, got {actual}")]
    CoordCountMismatch { expected: usize, actual: usize },

    /// Setting not registered in the store
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// Malformed selection expression
    #[error("Selection parse error: {0}")]
    SelectionParse(String),
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

impl From<SceneError> for HostError {
    fn from(e: SceneError) -> Self {
        match e {
            SceneError::ObjectNotFound(name) => HostError::SelectionNotFound(name),
            SceneError::InvalidState { index, count } => HostError::InvalidState { index, count },
            SceneError::UnknownSetting(name) => HostError::UnknownSetting(name),
            other => HostError::Query(other.to_string()),
        }
    }
}
