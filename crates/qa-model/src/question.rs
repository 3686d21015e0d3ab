use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ModelError, Priority, QuestionId, QuestionStatus, ResponseId};

/// Categories offered by the review queue filter and the ask form.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "technical",
    "process",
    "security",
    "policy",
    "tools",
    "general",
];

/// Free-form question category, stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(value: impl AsRef<str>) -> Result<Self, ModelError> {
        let normalized = value.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ModelError::BlankCategory);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_CATEGORIES.contains(&self.0.as_str())
    }
}

impl TryFrom<String> for Category {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A question in the review workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub excerpt: String,
    /// Full body shown on the detail page; empty for summary-only records.
    #[serde(default)]
    pub description: String,
    pub author: String,
    pub author_avatar: String,
    pub status: QuestionStatus,
    pub priority: Priority,
    pub category: Category,
    pub reviewer_group: String,
    pub created_at: DateTime<Utc>,
    pub responses: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Question {
    /// Body for the detail view, falling back to the excerpt.
    pub fn body(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.excerpt
        } else {
            &self.description
        }
    }

    /// "1 response" / "N responses".
    pub fn response_label(&self) -> String {
        let suffix = if self.responses == 1 { "" } else { "s" };
        format!("{} response{suffix}", self.responses)
    }
}

/// One reply in a question's discussion thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub author: String,
    pub author_avatar: String,
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub helpful: u32,
    pub is_reviewer: bool,
}
