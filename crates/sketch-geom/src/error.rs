//! Error types for host queries and geometry

use thiserror::Error;

/// Result type for geometry operations
pub type GeomResult<T> = Result<T, GeomError>;

/// Errors reported by a host when answering a query
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    /// Selection expression does not name anything the host knows
    #[error("selection not found: {0}")]
    SelectionNotFound(String),

    /// Selection resolved to zero atoms
    #[error("selection contains no atoms: {0}")]
    EmptySelection(String),

    /// State index outside of the host's state range
    #[error("invalid state index: {index} (host has {count} states)")]
    InvalidState { index: usize, count: usize },

    /// Setting name unknown to the host
    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    /// Name that cannot be used for a host object
    #[error("invalid object name: '{0}'")]
    InvalidName(String),

    /// Any other host-side failure
    #[error("host query failed: {0}")]
    Query(String),
}

/// Errors that can occur while computing selection geometry
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// Selection yielded zero atoms
    #[error("selection contains no atoms: {0}")]
    EmptySelection(String),

    /// Total weight of the selection is zero
    #[error("total mass of selection '{0}' is zero")]
    DivideByZero(String),

    /// State index not expressible as a [`crate::State`]
    #[error("invalid state: {0} (use a positive index, 0 for all states or -1 for current)")]
    InvalidState(i64),

    /// Host query failed; propagated unchanged
    #[error(transparent)]
    Host(#[from] HostError),
}
