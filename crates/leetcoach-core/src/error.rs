//! Error types for progress persistence and coaching sessions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving the progress record.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The progress file could not be read or written.
    #[error("progress file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The progress file exists but does not hold a valid progress record.
    #[error("progress file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory record could not be serialized.
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can abort an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Persisting progress failed.
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
