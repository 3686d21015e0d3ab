use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid question id: {0}")]
    InvalidQuestionId(String),
    #[error("invalid response id: {0}")]
    InvalidResponseId(String),
    #[error("category must not be blank")]
    BlankCategory,
    #[error("unknown question status: {0}")]
    UnknownStatus(String),
    #[error("unknown priority: {0}")]
    UnknownPriority(String),
    #[error("unknown issue type: {0}")]
    UnknownIssueType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
