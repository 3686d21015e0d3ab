//! Data model for the Q&A review desk: questions, responses, messages and badges.

pub mod badge;
pub mod enums;
pub mod error;
pub mod ids;
pub mod message;
pub mod question;
pub mod time;

pub use badge::{Badge, BadgeColor, TagBadges, VISIBLE_TAGS, tag_badges};
pub use enums::{IssueType, Priority, QuestionStatus};
pub use error::{ModelError, Result};
pub use ids::{MessageId, QuestionId, ResponseId};
pub use message::Message;
pub use question::{Category, KNOWN_CATEGORIES, Question, Response};
pub use time::relative_age;
