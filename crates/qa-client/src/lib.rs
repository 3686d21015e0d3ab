//! Blocking HTTP clients for the Q&A review desk.
//!
//! [`MessageClient`] talks to the local message backend and [`JiraClient`]
//! opens tracker tickets. Both implement the seams defined in `qa-core`.

pub mod error;
mod http;
pub mod jira;
pub mod messages;

pub use error::{ClientError, Result};
pub use http::REQUEST_TIMEOUT;
pub use jira::{IssuePayload, JiraClient};
pub use messages::{DEFAULT_BACKEND_URL, MessageClient};
