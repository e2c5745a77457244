//! Error types for Groq client.

use thiserror::Error;

/// Result type for Groq client operations.
pub type Result<T> = std::result::Result<T, GroqError>;

/// Groq client errors.
#[derive(Debug, Error)]
pub enum GroqError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, DNS, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response: auth, quota, invalid request)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The service answered without any choices
    #[error("No completion returned")]
    EmptyResponse,
}

impl GroqError {
    /// Whether the service rejected the API key.
    pub fn is_auth(&self) -> bool {
        matches!(self, GroqError::Api { status: 401 | 403, .. })
    }

    /// Whether the request was throttled (rate limit or quota).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GroqError::Api { status: 429, .. })
    }
}
