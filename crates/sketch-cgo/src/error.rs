//! Error types for CGO rendering

use sketch_geom::HostError;
use thiserror::Error;

/// Result type for render operations
pub type CgoResult<T> = Result<T, CgoError>;

/// Errors that can occur while handing a stream to the host
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CgoError {
    /// Host sink rejected a call; propagated unchanged
    #[error(transparent)]
    Host(#[from] HostError),
}
