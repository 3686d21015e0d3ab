//! Error types for the HTTP clients.

use thiserror::Error;

use qa_core::ApiError;

/// Errors that can occur while talking to the message backend or the tracker.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured base URL is not an http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `error` field of the response body, when present.
        message: Option<String>,
    },

    /// Failed to parse JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Network error. Please check if the backend is running.",
            Self::Status {
                message: Some(message),
                ..
            } => message.as_str(),
            Self::Status { status: 401 | 403, .. } => {
                "The server rejected the credentials. Check the API token."
            }
            Self::Status { .. } => "The server rejected the request.",
            Self::InvalidUrl(_) => "The configured server URL is not valid.",
            Self::JsonParse(_) => "The server sent an unexpected response.",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status, message } => Self::Rejected { status, message },
            ClientError::JsonParse(message) => Self::Decode(message),
            ClientError::Network(message) | ClientError::InvalidUrl(message) => {
                Self::Transport(message)
            }
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
