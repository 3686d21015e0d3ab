//! Type-safe enumerations for question workflow metadata.
//!
//! Every enum here has a strict `FromStr` (used for user input) and a
//! lenient `from_raw` that maps anything unrecognised to `Unknown` so that
//! records coming from elsewhere never fail to load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Review status of a question. Each known status is one queue tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStatus {
    /// Waiting for a reviewer to pick it up.
    Pending,
    /// A reviewer group is working on it.
    InReview,
    /// At least one accepted answer exists.
    Answered,
    /// Anything else; renders the fallback badge.
    #[serde(other)]
    Unknown,
}

impl QuestionStatus {
    /// The statuses that form queue tabs, in display order.
    pub const TABS: [QuestionStatus; 3] = [
        QuestionStatus::Pending,
        QuestionStatus::InReview,
        QuestionStatus::Answered,
    ];

    /// Returns the wire key (`pending`, `in-review`, `answered`).
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Pending => "pending",
            QuestionStatus::InReview => "in-review",
            QuestionStatus::Answered => "answered",
            QuestionStatus::Unknown => "unknown",
        }
    }

    pub fn from_raw(raw: &str) -> Self {
        raw.parse().unwrap_or(QuestionStatus::Unknown)
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(QuestionStatus::Pending),
            "in-review" | "in_review" => Ok(QuestionStatus::InReview),
            "answered" => Ok(QuestionStatus::Answered),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// Urgency assigned by the asker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Unknown => "unknown",
        }
    }

    /// Sort rank, highest first: urgent(4) > high(3) > medium(2) > low(1).
    /// Unknown priorities rank below everything else.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Unknown => 0,
        }
    }

    /// Priority name understood by the issue tracker.
    pub fn tracker_name(&self) -> &'static str {
        match self {
            Priority::Urgent => "Highest",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low | Priority::Unknown => "Low",
        }
    }

    pub fn from_raw(raw: &str) -> Self {
        raw.parse().unwrap_or(Priority::Unknown)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(ModelError::UnknownPriority(s.to_string())),
        }
    }
}

/// Issue type used when a question is mirrored into the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    #[default]
    Task,
    Story,
    Bug,
    Epic,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Task => "Task",
            IssueType::Story => "Story",
            IssueType::Bug => "Bug",
            IssueType::Epic => "Epic",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "task" => Ok(IssueType::Task),
            "story" => Ok(IssueType::Story),
            "bug" => Ok(IssueType::Bug),
            "epic" => Ok(IssueType::Epic),
            _ => Err(ModelError::UnknownIssueType(s.to_string())),
        }
    }
}
