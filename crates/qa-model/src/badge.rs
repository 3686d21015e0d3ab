//! Colored labels shown next to questions.
//!
//! The lookups are total: any status or priority outside the known set maps
//! to the secondary "Unknown" badge.

use serde::Serialize;
use std::fmt;

use crate::{Priority, QuestionStatus};

/// Number of tags rendered before the rest collapse into a `+N` badge.
pub const VISIBLE_TAGS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Success,
    Warning,
    Danger,
    Info,
    Dark,
    Secondary,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Success => "success",
            BadgeColor::Warning => "warning",
            BadgeColor::Danger => "danger",
            BadgeColor::Info => "info",
            BadgeColor::Dark => "dark",
            BadgeColor::Secondary => "secondary",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub color: BadgeColor,
    pub text: &'static str,
}

impl Badge {
    pub const UNKNOWN: Badge = Badge {
        color: BadgeColor::Secondary,
        text: "Unknown",
    };

    const fn new(color: BadgeColor, text: &'static str) -> Self {
        Self { color, text }
    }

    pub fn for_status(status: QuestionStatus) -> Self {
        match status {
            QuestionStatus::Pending => Badge::new(BadgeColor::Warning, "Pending Review"),
            QuestionStatus::InReview => Badge::new(BadgeColor::Info, "In Review"),
            QuestionStatus::Answered => Badge::new(BadgeColor::Success, "Answered"),
            QuestionStatus::Unknown => Badge::UNKNOWN,
        }
    }

    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::Low => Badge::new(BadgeColor::Success, "Low"),
            Priority::Medium => Badge::new(BadgeColor::Warning, "Medium"),
            Priority::High => Badge::new(BadgeColor::Danger, "High"),
            Priority::Urgent => Badge::new(BadgeColor::Dark, "Urgent"),
            Priority::Unknown => Badge::UNKNOWN,
        }
    }
}

/// The `#tag` badges for one question plus the collapsed overflow count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBadges<'a> {
    pub shown: &'a [String],
    pub overflow: usize,
}

impl TagBadges<'_> {
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.shown.iter().map(|tag| format!("#{tag}")).collect();
        if self.overflow > 0 {
            labels.push(format!("+{}", self.overflow));
        }
        labels
    }
}

pub fn tag_badges(tags: &[String]) -> TagBadges<'_> {
    let visible = tags.len().min(VISIBLE_TAGS);
    TagBadges {
        shown: &tags[..visible],
        overflow: tags.len() - visible,
    }
}
