//! Curriculum fetch error types.

use thiserror::Error;

/// Why a single curriculum source produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The page had no embedded problem data.
    #[error("no embedded problem data in page")]
    MissingPayload,

    /// The payload was not the expected JSON shape.
    #[error("failed to parse problem data: {0}")]
    Parse(String),

    /// The source answered with an empty problem list.
    #[error("problem list is empty")]
    Empty,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
