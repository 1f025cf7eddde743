//! Error types for gridpull.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias for gridpull operations.
pub type Result<T> = std::result::Result<T, GridpullError>;

/// Errors that can occur during data download and output.
#[derive(Error, Debug)]
pub enum GridpullError {
    /// API key file missing or unreadable.
    #[error("Credential error: {0}")]
    Credential(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success status, or a body that could not be decoded.
    #[error("Response error: {0}")]
    Response(String),

    /// Invalid hour range.
    #[error(transparent)]
    HourRange(#[from] HourRangeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid hour ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HourRangeError {
    /// Start of the range is after its end.
    #[error("Invalid hour range: {first} > {last}")]
    InvalidRange {
        /// The first hour.
        first: DateTime<Utc>,
        /// The last hour.
        last: DateTime<Utc>,
    },
}
