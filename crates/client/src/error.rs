//! Fetch error types.

use agencyhub_shared::AppError;
use thiserror::Error;

/// Errors raised while fetching a resource.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL or resource URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, TLS, or timeout failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("HTTP {status} from {url}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// Response body, if any.
        message: String,
    },

    /// Body was not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns true if another attempt may succeed.
    ///
    /// Transport failures and 5xx responses are retried; 4xx, bad URLs and
    /// undecodable bodies are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::InvalidUrl(_) | Self::Decode(_) => false,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidUrl(message) => Self::Configuration(message),
            ClientError::Transport(err) => Self::ExternalService(err.to_string()),
            ClientError::Status {
                status, message, ..
            } => Self::from_status(status, message),
            ClientError::Decode(err) => Self::Decode(err.to_string()),
        }
    }
}
