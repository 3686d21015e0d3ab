//! Client-side validation for the ask-question and message forms.
//!
//! Validation is all-or-nothing: a draft either becomes a validated value or
//! yields one error per offending field.

use std::fmt;

use serde::{Deserialize, Serialize};

use qa_model::{Category, IssueType, Priority};

/// Categories selectable on the ask form.
pub const FORM_CATEGORIES: [(&str, &str); 5] = [
    ("technical", "Technical"),
    ("process", "Process & Workflow"),
    ("policy", "Policy & Guidelines"),
    ("tools", "Tools & Software"),
    ("general", "General"),
];

/// Reviewer groups as `(key, display name)`.
pub const REVIEWER_GROUPS: [(&str, &str); 6] = [
    ("tech-team", "Technical Team"),
    ("devops-team", "DevOps Team"),
    ("senior-developers", "Senior Developers"),
    ("product-team", "Product Team"),
    ("qa-team", "QA Team"),
    ("management", "Management"),
];

/// Display name for a reviewer group key.
pub fn reviewer_group_name(key: &str) -> Option<&'static str> {
    let key = key.trim();
    REVIEWER_GROUPS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Category,
    ReviewerGroup,
    ServerUrl,
    ProjectKey,
    ApiToken,
    Content,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Category => "category",
            Field::ReviewerGroup => "reviewer_group",
            Field::ServerUrl => "server_url",
            Field::ProjectKey => "project_key",
            Field::ApiToken => "api_token",
            Field::Content => "content",
        }
    }

    /// Inline feedback shown under the field.
    pub fn feedback(&self) -> &'static str {
        match self {
            Field::Title => "Please provide a clear title for your question.",
            Field::Description => "Please provide detailed information about your question.",
            Field::Category => "Please select a category for your question.",
            Field::ReviewerGroup => "Please select a reviewer group.",
            Field::ServerUrl => "Please provide a valid JIRA server URL.",
            Field::ProjectKey => "Please provide a JIRA project key.",
            Field::ApiToken => "Please provide a JIRA API token.",
            Field::Content => "Please provide a message.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that failed validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<Field>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    fn push(&mut self, field: Field) {
        self.0.push(field);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Field::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Settings for mirroring a question into the issue tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOptions {
    pub server_url: String,
    pub project_key: String,
    pub issue_type: IssueType,
    pub api_token: String,
}

/// Raw ask-question input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    /// Comma separated.
    pub tags: String,
    pub reviewer_group: String,
    pub create_ticket: bool,
    pub ticket: TicketOptions,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidQuestion {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub tags: Vec<String>,
    /// Raw tag text, kept for the ticket description.
    pub tags_text: String,
    pub reviewer_group_key: String,
    pub reviewer_group: String,
    pub ticket: Option<TicketOptions>,
}

impl QuestionDraft {
    pub fn validate(&self) -> Result<ValidQuestion, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.title.trim().is_empty() {
            errors.push(Field::Title);
        }
        let category = FORM_CATEGORIES
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(self.category.trim()))
            .and_then(|(key, _)| Category::new(key).ok());
        if category.is_none() {
            errors.push(Field::Category);
        }
        let reviewer_group = reviewer_group_name(&self.reviewer_group);
        if reviewer_group.is_none() {
            errors.push(Field::ReviewerGroup);
        }
        if self.description.trim().is_empty() {
            errors.push(Field::Description);
        }
        if self.create_ticket {
            if !is_http_url(&self.ticket.server_url) {
                errors.push(Field::ServerUrl);
            }
            if self.ticket.project_key.trim().is_empty() {
                errors.push(Field::ProjectKey);
            }
            if self.ticket.api_token.trim().is_empty() {
                errors.push(Field::ApiToken);
            }
        }

        match (category, reviewer_group) {
            (Some(category), Some(reviewer_group)) if errors.is_empty() => Ok(ValidQuestion {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                category,
                priority: self.priority,
                tags: parse_tags(&self.tags),
                tags_text: self.tags.trim().to_string(),
                reviewer_group_key: self.reviewer_group.trim().to_lowercase(),
                reviewer_group: reviewer_group.to_string(),
                ticket: self.create_ticket.then(|| TicketOptions {
                    server_url: self.ticket.server_url.trim().trim_end_matches('/').to_string(),
                    project_key: self.ticket.project_key.trim().to_string(),
                    issue_type: self.ticket.issue_type,
                    api_token: self.ticket.api_token.trim().to_string(),
                }),
            }),
            _ => Err(errors),
        }
    }
}

/// Splits comma separated tags, dropping blanks and duplicates.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn is_http_url(raw: &str) -> bool {
    let raw = raw.trim();
    ["http://", "https://"]
        .iter()
        .any(|scheme| raw.len() > scheme.len() && raw.starts_with(scheme))
}

/// Trimmed message content, or the field error when it is blank.
pub fn validate_message(content: &str) -> Result<String, FieldErrors> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        let mut errors = FieldErrors::default();
        errors.push(Field::Content);
        return Err(errors);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> QuestionDraft {
        QuestionDraft {
            title: "  How do we rotate secrets? ".to_string(),
            description: "Details".to_string(),
            category: "technical".to_string(),
            tags: "vault, secrets,,Vault".to_string(),
            reviewer_group: "devops-team".to_string(),
            ..QuestionDraft::default()
        }
    }

    #[test]
    fn complete_draft_validates() {
        let valid = complete_draft().validate().unwrap();
        assert_eq!(valid.title, "How do we rotate secrets?");
        assert_eq!(valid.category.as_str(), "technical");
        assert_eq!(valid.priority, Priority::Medium);
        assert_eq!(valid.tags, vec!["vault", "secrets"]);
        assert_eq!(valid.reviewer_group, "DevOps Team");
        assert!(valid.ticket.is_none());
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = QuestionDraft::default().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            &[
                Field::Title,
                Field::Category,
                Field::ReviewerGroup,
                Field::Description
            ]
        );
        assert_eq!(errors.to_string(), "title, category, reviewer_group, description");
    }

    #[test]
    fn ticket_fields_required_only_when_requested() {
        let mut draft = complete_draft();
        draft.create_ticket = true;
        draft.ticket.server_url = "your-domain.atlassian.net".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            &[Field::ServerUrl, Field::ProjectKey, Field::ApiToken]
        );

        draft.ticket = TicketOptions {
            server_url: "https://example.atlassian.net/".to_string(),
            project_key: "QA".to_string(),
            issue_type: IssueType::Story,
            api_token: "secret".to_string(),
        };
        let ticket = draft.validate().unwrap().ticket.unwrap();
        assert_eq!(ticket.server_url, "https://example.atlassian.net");
        assert_eq!(ticket.issue_type, IssueType::Story);
    }

    #[test]
    fn unknown_category_or_group_is_rejected() {
        let mut draft = complete_draft();
        draft.category = "security".to_string();
        draft.reviewer_group = "Security Team".to_string();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains(Field::Category));
        assert!(errors.contains(Field::ReviewerGroup));
    }

    #[test]
    fn message_content_is_trimmed() {
        assert_eq!(validate_message("  hi  ").unwrap(), "hi");
        let errors = validate_message(" \n ").unwrap_err();
        assert!(errors.contains(Field::Content));
        assert_eq!(Field::Content.feedback(), "Please provide a message.");
    }
}
