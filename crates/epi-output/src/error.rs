//! Error types for epi-output.

use thiserror::Error;

use crate::RunId;

/// Errors that can occur when writing output or accessing stored runs.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no stored run with id {0}")]
    NotFound(RunId),

    #[error("invalid run id: {0}")]
    InvalidRunId(#[from] uuid::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
