//! Error types for the report pipeline.
//!
//! Fatal conditions (missing credential, failed fetch, empty catalog)
//! surface as [`Error`] and terminate the run; a single malformed
//! upstream record is a [`SkipReason`](crate::catalog::SkipReason),
//! which is logged and recovered locally by the adapter, never
//! escalated here.

use thiserror::Error;

/// Report pipeline errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or invalid.
    #[error("Config error: {0}")]
    Config(String),

    /// Network-level failure talking to the upstream API.
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream API returned a non-success status.
    #[error("API error: upstream returned status {status}")]
    Api {
        /// HTTP status code from the upstream response.
        status: u16,
    },

    /// Fetch succeeded but yielded zero usable records.
    #[error("Empty catalog: no usable models in the API response")]
    EmptyCatalog,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error writing report output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
