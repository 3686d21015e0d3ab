//! JIRA REST v3 issue creation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use qa_core::{ApiError, CreatedTicket, IssueTracker, TicketRequest};

use crate::error::Result;
use crate::http::{REQUEST_TIMEOUT, build_client, check_status, normalize_base_url, read_json};

const CREATE_ISSUE_PATH: &str = "/rest/api/3/issue";

/// Request body for `POST /rest/api/3/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    pub fields: IssueFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: Document,
    pub issuetype: NamedRef,
    pub priority: NamedRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub name: String,
}

/// Atlassian document with a single paragraph of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub version: u8,
    pub content: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub content: Vec<TextNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl Document {
    pub fn plain(text: &str) -> Self {
        Self {
            kind: "doc",
            version: 1,
            content: vec![Paragraph {
                kind: "paragraph",
                content: vec![TextNode {
                    kind: "text",
                    text: text.to_string(),
                }],
            }],
        }
    }
}

impl IssuePayload {
    pub fn from_request(request: &TicketRequest) -> Self {
        Self {
            fields: IssueFields {
                project: ProjectRef {
                    key: request.project_key.clone(),
                },
                summary: request.summary.clone(),
                description: Document::plain(&request.description),
                issuetype: NamedRef {
                    name: request.issue_type.as_str().to_string(),
                },
                priority: NamedRef {
                    name: request.priority.tracker_name().to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: String,
}

/// Blocking JIRA client. The server URL and token travel with each request.
#[derive(Debug, Clone)]
pub struct JiraClient {
    client: Client,
}

impl JiraClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }

    /// Create one issue and return its key.
    pub fn create(&self, request: &TicketRequest) -> Result<CreatedTicket> {
        let span = info_span!("create_issue", project = %request.project_key);
        let _guard = span.enter();

        let url = format!("{}{CREATE_ISSUE_PATH}", normalize_base_url(&request.server_url)?);
        let response = self
            .client
            .post(url)
            .basic_auth(&request.api_token, Some(&request.api_token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&IssuePayload::from_request(request))
            .send()?;
        let created: CreatedIssue = read_json(check_status(response)?)?;
        info!(key = %created.key, "issue created");
        Ok(CreatedTicket { key: created.key })
    }
}

impl IssueTracker for JiraClient {
    fn create_issue(&self, request: &TicketRequest) -> std::result::Result<CreatedTicket, ApiError> {
        self.create(request).map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_model::{IssueType, Priority};

    fn request(priority: Priority) -> TicketRequest {
        TicketRequest {
            server_url: "https://tracker.example.com".to_string(),
            api_token: "token".to_string(),
            project_key: "QA".to_string(),
            issue_type: IssueType::Bug,
            summary: "Broken login".to_string(),
            description: "Category: security".to_string(),
            priority,
        }
    }

    #[test]
    fn payload_matches_create_issue_shape() {
        let payload = IssuePayload::from_request(&request(Priority::Urgent));
        insta::assert_json_snapshot!(payload, @r#"
        {
          "fields": {
            "project": {
              "key": "QA"
            },
            "summary": "Broken login",
            "description": {
              "type": "doc",
              "version": 1,
              "content": [
                {
                  "type": "paragraph",
                  "content": [
                    {
                      "type": "text",
                      "text": "Category: security"
                    }
                  ]
                }
              ]
            },
            "issuetype": {
              "name": "Bug"
            },
            "priority": {
              "name": "Highest"
            }
          }
        }
        "#);
    }

    #[test]
    fn unknown_priority_maps_to_low() {
        let payload = IssuePayload::from_request(&request(Priority::Unknown));
        assert_eq!(payload.fields.priority.name, "Low");
    }
}
