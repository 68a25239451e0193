//! Error types for the summarizer backend.

use thiserror::Error;

/// Errors from a text-generation backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    /// Transport failure: connection, timeout or TLS.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("generation API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl AiError {
    /// Whether the same request could succeed later.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::JsonParse(_) => false,
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs are not part of the message.
        Self::Network(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for AiError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for summarizer backends.
pub type Result<T> = std::result::Result<T, AiError>;
