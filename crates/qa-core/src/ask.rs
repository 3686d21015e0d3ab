//! Ask-question submission flow.
//!
//! Ticket creation is best effort: when it fails the question is still
//! stored and the failure is reported through the error banner.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, info_span, warn};

use qa_model::{Question, QuestionStatus};

use crate::banner::Banner;
use crate::error::{CoreError, Result};
use crate::form::QuestionDraft;
use crate::repository::InMemoryStore;
use crate::tracker::{CreatedTicket, IssueTracker, TicketRequest};

/// Delay before the view moves on to the dashboard after a submission.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Longest excerpt derived from a description, in characters.
pub const EXCERPT_CHARS: usize = 100;

pub const TICKET_FAILED_MESSAGE: &str = "Question submitted successfully, but JIRA ticket creation failed. \
                                         Please create the ticket manually.";

/// Where the view goes once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub route: &'static str,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSubmission {
    pub question: Question,
    pub ticket: Option<CreatedTicket>,
    pub redirect: Redirect,
}

/// Ask-question form state.
#[derive(Debug, Clone, Default)]
pub struct QuestionForm {
    pub draft: QuestionDraft,
    validated: bool,
    success: Option<Banner>,
    error: Option<Banner>,
}

impl QuestionForm {
    pub fn new(draft: QuestionDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    /// True once a submit attempt failed validation.
    pub fn validated(&self) -> bool {
        self.validated
    }

    pub fn success(&self) -> Option<&Banner> {
        self.success.as_ref()
    }

    pub fn error(&self) -> Option<&Banner> {
        self.error.as_ref()
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Validates the draft, optionally opens a ticket, and appends the question.
    ///
    /// # Errors
    ///
    /// `CoreError::Invalid` when required fields are missing; nothing is
    /// stored and the draft is kept.
    pub fn submit(
        &mut self,
        store: &mut InMemoryStore,
        tracker: Option<&dyn IssueTracker>,
        author: &str,
        now: DateTime<Utc>,
    ) -> Result<QuestionSubmission> {
        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                self.validated = true;
                return Err(CoreError::Invalid(errors));
            }
        };

        let span = info_span!("submit_question", title = %valid.title);
        let _guard = span.enter();

        let ticket = match &valid.ticket {
            Some(options) => {
                let request = TicketRequest::from_question(&valid, options);
                let created = tracker
                    .ok_or_else(|| "no issue tracker configured".to_string())
                    .and_then(|tracker| {
                        tracker
                            .create_issue(&request)
                            .map_err(|error| error.to_string())
                    });
                match created {
                    Ok(ticket) => {
                        info!(key = %ticket.key, "ticket created");
                        Some(ticket)
                    }
                    Err(error) => {
                        warn!(%error, "ticket creation failed");
                        self.error = Some(Banner::danger(TICKET_FAILED_MESSAGE));
                        None
                    }
                }
            }
            None => None,
        };

        let question = Question {
            id: store.next_id(),
            title: valid.title,
            excerpt: excerpt(&valid.description),
            description: valid.description,
            author: author.to_string(),
            author_avatar: String::new(),
            status: QuestionStatus::Pending,
            priority: valid.priority,
            category: valid.category,
            reviewer_group: valid.reviewer_group,
            created_at: now,
            responses: 0,
            tags: valid.tags,
        };
        store.append(question.clone());
        info!(id = %question.id, "question submitted");

        self.success = Some(Banner::success(match &ticket {
            Some(ticket) => format!(
                "Question submitted successfully! JIRA ticket {} has been created.",
                ticket.key
            ),
            None => "Question submitted successfully!".to_string(),
        }));
        self.draft = QuestionDraft::default();
        self.validated = false;

        Ok(QuestionSubmission {
            question,
            ticket,
            redirect: Redirect {
                route: "dashboard",
                after: REDIRECT_DELAY,
            },
        })
    }
}

/// First `EXCERPT_CHARS` characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_cuts_long_text() {
        assert_eq!(excerpt("short"), "short");
        let long = "x".repeat(EXCERPT_CHARS + 5);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
    }
}
