//! Seam for mirroring questions into an external issue tracker.

use std::fmt;

use qa_model::{IssueType, Priority};

use crate::error::ApiError;
use crate::form::{TicketOptions, ValidQuestion};

/// Placeholder printed instead of credentials.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Everything needed to open one ticket.
#[derive(Clone, PartialEq, Eq)]
pub struct TicketRequest {
    pub server_url: String,
    pub api_token: String,
    pub project_key: String,
    pub issue_type: IssueType,
    pub summary: String,
    /// Plain text body; the tracker client wraps it in its document format.
    pub description: String,
    pub priority: Priority,
}

impl TicketRequest {
    pub fn from_question(question: &ValidQuestion, options: &TicketOptions) -> Self {
        Self {
            server_url: options.server_url.clone(),
            api_token: options.api_token.clone(),
            project_key: options.project_key.clone(),
            issue_type: options.issue_type,
            summary: question.title.clone(),
            description: ticket_description(question),
            priority: question.priority,
        }
    }
}

impl fmt::Debug for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketRequest")
            .field("server_url", &self.server_url)
            .field("api_token", &REDACTED_VALUE)
            .field("project_key", &self.project_key)
            .field("issue_type", &self.issue_type)
            .field("summary", &self.summary)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

fn ticket_description(question: &ValidQuestion) -> String {
    format!(
        "Category: {}\nPriority: {}\nReviewer Group: {}\nTags: {}\n\nDescription:\n{}",
        question.category,
        question.priority,
        question.reviewer_group_key,
        question.tags_text,
        question.description
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTicket {
    pub key: String,
}

pub trait IssueTracker {
    fn create_issue(&self, request: &TicketRequest) -> Result<CreatedTicket, ApiError>;
}
