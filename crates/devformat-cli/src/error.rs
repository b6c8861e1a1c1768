//! Error types for devformat-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from devformat-core
    #[error(transparent)]
    Core(#[from] devformat_core::Error),

    /// Session change rejected while a run is in flight
    #[error(transparent)]
    Session(#[from] devformat_core::SessionError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config file could not be read or written
    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A tool run ended in failure
    #[error("{tool}: {message}")]
    ToolFailed {
        tool: String,
        message: String,
        kind: devformat_core::FailureKind,
    },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
