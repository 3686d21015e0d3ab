//! Review queue engine and form flows for the Q&A review desk.

pub mod ask;
pub mod banner;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod messages;
pub mod query;
pub mod repository;
pub mod seed;
pub mod state;
pub mod thread;
pub mod tracker;

pub use ask::{QuestionForm, QuestionSubmission, REDIRECT_DELAY, Redirect, TICKET_FAILED_MESSAGE};
pub use banner::{Banner, BannerKind};
pub use dashboard::{DashboardStats, RECENT_LIMIT, recent_questions};
pub use error::{ApiError, CoreError, Result};
pub use form::{
    FORM_CATEGORIES, Field, FieldErrors, QuestionDraft, REVIEWER_GROUPS, TicketOptions,
    ValidQuestion, parse_tags, reviewer_group_name, validate_message,
};
pub use messages::{MessageApi, MessageBoard, RECENT_MESSAGES};
pub use query::{
    CategoryFilter, QueueQuery, SortBy, TabCounts, empty_tab_message, matches_search,
    visible_questions,
};
pub use repository::{InMemoryStore, QuestionRepository};
pub use state::{QueueAction, QueueState, QueueView, reduce};
pub use thread::{Responder, Thread};
pub use tracker::{CreatedTicket, IssueTracker, TicketRequest};
