use thiserror::Error;

use qa_model::{ModelError, QuestionId, ResponseId};

use crate::form::FieldErrors;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Invalid(FieldErrors),
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),
    #[error("response {0} not found")]
    ResponseNotFound(ResponseId),
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Failure reported by an external collaborator (message backend or issue tracker).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// Error string from the response body, when the service sent one.
        message: Option<String>,
    },
    /// The service could not be reached.
    #[error("transport error: {0}")]
    Transport(String),
    /// The service answered but the body could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),
}
