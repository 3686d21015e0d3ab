//! Optional TOML configuration file.
//!
//! ```toml
//! backend_url = "http://localhost:8080"
//! current_user = "Mike Chen"
//!
//! [jira]
//! server_url = "https://example.atlassian.net"
//! project_key = "QA"
//! issue_type = "Task"
//! api_token = "..."
//! ```
//!
//! Command-line flags take precedence over the file; the file takes
//! precedence over built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use qa_client::DEFAULT_BACKEND_URL;
use qa_core::TicketOptions;
use qa_model::IssueType;

/// Name used for authored questions and replies when none is configured.
pub const DEFAULT_CURRENT_USER: &str = "Current User";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeskConfig {
    pub backend_url: Option<String>,
    pub current_user: Option<String>,
    pub jira: JiraConfig,
}

/// Defaults for the ticket fields of `ask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JiraConfig {
    pub server_url: Option<String>,
    pub project_key: Option<String>,
    pub issue_type: Option<IssueType>,
    pub api_token: Option<String>,
}

/// Ticket fields given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketOverrides {
    pub server_url: Option<String>,
    pub project_key: Option<String>,
    pub issue_type: Option<IssueType>,
    pub api_token: Option<String>,
}

impl DeskConfig {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load `path` when given, otherwise use defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn backend_url(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.backend_url.clone())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    pub fn current_user(&self) -> &str {
        self.current_user
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_CURRENT_USER)
    }

    /// Merge ticket flags over the `[jira]` table.
    pub fn ticket_options(&self, overrides: TicketOverrides) -> TicketOptions {
        let jira = &self.jira;
        TicketOptions {
            server_url: overrides
                .server_url
                .or_else(|| jira.server_url.clone())
                .unwrap_or_default(),
            project_key: overrides
                .project_key
                .or_else(|| jira.project_key.clone())
                .unwrap_or_default(),
            issue_type: overrides
                .issue_type
                .or(jira.issue_type)
                .unwrap_or_default(),
            api_token: overrides
                .api_token
                .or_else(|| jira.api_token.clone())
                .unwrap_or_default(),
        }
    }
}
