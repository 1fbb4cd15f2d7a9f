use thiserror::Error;

use romdb_core::RomDbError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be loaded
    #[error("Database error: {0}")]
    Database(#[from] RomDbError),

    /// Logger setup failed
    #[error("Logger error: {0}")]
    Logger(String),

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }
}
