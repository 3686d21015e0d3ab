//! CLI argument definitions for the review desk.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use qa_core::{CategoryFilter, SortBy};
use qa_model::{IssueType, Priority, QuestionId, QuestionStatus, ResponseId};

#[derive(Parser)]
#[command(
    name = "qa-desk",
    version,
    about = "Q&A review desk - ask questions, triage the review queue, post messages",
    long_about = "Browse and triage developer questions awaiting review.\n\n\
                  Questions live in an in-memory store seeded on every run. Messages are\n\
                  read from and posted to the message backend; tickets can be opened in JIRA."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Message backend base URL (overrides the configuration file).
    #[arg(long = "backend-url", value_name = "URL", global = true)]
    pub backend_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the review queue for one tab.
    Queue(QueueArgs),

    /// Show summary counts and the most recent questions.
    Dashboard,

    /// Show a question with its discussion thread.
    Question(QuestionArgs),

    /// Ask a new question, optionally opening a JIRA ticket.
    Ask(AskArgs),

    /// Read or post messages on the message backend.
    Messages(MessagesArgs),
}

#[derive(Args)]
pub struct QueueArgs {
    /// Status tab to show.
    #[arg(long = "tab", value_enum, default_value = "pending")]
    pub tab: TabArg,

    /// Case-insensitive match against title or author.
    #[arg(long = "search", default_value = "")]
    pub search: String,

    /// Category key, or "all".
    #[arg(long = "category", default_value = "all")]
    pub category: CategoryFilter,

    /// Sort order.
    #[arg(long = "sort", value_enum, default_value = "newest")]
    pub sort: SortArg,
}

#[derive(Args)]
pub struct QuestionArgs {
    /// Question id.
    #[arg(value_name = "ID")]
    pub id: QuestionId,

    /// Add a response to the thread.
    #[arg(long = "respond", value_name = "TEXT")]
    pub respond: Option<String>,

    /// Mark a response as helpful.
    #[arg(long = "helpful", value_name = "RESPONSE_ID")]
    pub helpful: Option<ResponseId>,
}

#[derive(Args)]
pub struct AskArgs {
    #[arg(long = "title", default_value = "")]
    pub title: String,

    #[arg(long = "description", default_value = "")]
    pub description: String,

    /// One of technical, process, policy, tools, general.
    #[arg(long = "category", default_value = "")]
    pub category: String,

    /// Reviewer group key, e.g. tech-team or devops-team.
    #[arg(long = "reviewer-group", value_name = "GROUP", default_value = "")]
    pub reviewer_group: String,

    #[arg(long = "priority", value_enum, default_value = "medium")]
    pub priority: PriorityArg,

    /// Comma-separated tags.
    #[arg(long = "tags", default_value = "")]
    pub tags: String,

    /// Also open a JIRA ticket for the question.
    #[arg(long = "create-ticket")]
    pub create_ticket: bool,

    /// JIRA server URL (overrides `[jira] server_url`).
    #[arg(long = "jira-server-url", value_name = "URL")]
    pub jira_server_url: Option<String>,

    /// JIRA project key (overrides `[jira] project_key`).
    #[arg(long = "jira-project-key", value_name = "KEY")]
    pub jira_project_key: Option<String>,

    /// JIRA issue type (overrides `[jira] issue_type`).
    #[arg(long = "jira-issue-type", value_enum)]
    pub jira_issue_type: Option<IssueTypeArg>,

    /// JIRA API token (overrides `[jira] api_token`).
    #[arg(long = "jira-api-token", value_name = "TOKEN")]
    pub jira_api_token: Option<String>,
}

#[derive(Args)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub action: MessagesCommand,
}

#[derive(Subcommand)]
pub enum MessagesCommand {
    /// List the most recent messages.
    List,

    /// Post a message.
    Send {
        #[arg(value_name = "CONTENT")]
        content: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TabArg {
    Pending,
    InReview,
    Answered,
}

impl From<TabArg> for QuestionStatus {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Pending => QuestionStatus::Pending,
            TabArg::InReview => QuestionStatus::InReview,
            TabArg::Answered => QuestionStatus::Answered,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Newest,
    Oldest,
    Priority,
}

impl From<SortArg> for SortBy {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Newest => SortBy::Newest,
            SortArg::Oldest => SortBy::Oldest,
            SortArg::Priority => SortBy::Priority,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
    Urgent,
}

impl From<PriorityArg> for Priority {
    fn from(priority: PriorityArg) -> Self {
        match priority {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
            PriorityArg::Urgent => Priority::Urgent,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IssueTypeArg {
    Task,
    Story,
    Bug,
    Epic,
}

impl From<IssueTypeArg> for IssueType {
    fn from(issue_type: IssueTypeArg) -> Self {
        match issue_type {
            IssueTypeArg::Task => IssueType::Task,
            IssueTypeArg::Story => IssueType::Story,
            IssueTypeArg::Bug => IssueType::Bug,
            IssueTypeArg::Epic => IssueType::Epic,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
