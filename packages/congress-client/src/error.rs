//! Error types for the Congress client.

use thiserror::Error;

/// Result type for Congress client operations.
pub type Result<T> = std::result::Result<T, CongressError>;

/// Congress client errors.
#[derive(Debug, Error)]
pub enum CongressError {
    /// Configuration error (missing API key, invalid base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service has nothing under the requested key
    #[error("Not found: {0}")]
    NotFound(String),

    /// API error (non-2xx response other than 404)
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CongressError {
    /// True for the "no results" case, as opposed to a fetch failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CongressError::NotFound(_))
    }
}
