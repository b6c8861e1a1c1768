//! Error types for devformat-core

/// Result type for devformat-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in devformat-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two tools were registered under the same id
    #[error("Duplicate tool id: {id}")]
    DuplicateId { id: String },

    /// Two tools were registered under the same route
    #[error("Duplicate route {route} (tools {first} and {second})")]
    DuplicateRoute {
        route: String,
        first: String,
        second: String,
    },

    /// A category name did not match any known category
    #[error("Unknown category '{name}'. Valid: {valid}")]
    UnknownCategory { name: String, valid: String },

    /// Session state transition was rejected
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Rejected session transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// An execute call is in flight
    #[error("Tool is still processing; wait for the current run to finish")]
    Busy,
}
