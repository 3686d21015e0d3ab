//! Q&A review desk CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use tracing::warn;

use qa_cli::commands::{
    ThreadActions, error_report, run_ask, run_dashboard, run_messages_list, run_messages_send,
    run_queue, run_question,
};
use qa_cli::config::{DeskConfig, TicketOverrides};
use qa_cli::logging::{LogConfig, LogFormat, init_logging};
use qa_client::{JiraClient, MessageClient};
use qa_core::{InMemoryStore, IssueTracker, QuestionDraft, QueueQuery, Responder};

mod cli;

use crate::cli::{AskArgs, Cli, Command, LogFormatArg, LogLevelArg, MessagesCommand};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {}", error_report(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<bool> {
    let config = DeskConfig::load_optional(cli.config.as_deref())?;
    let now = Utc::now();
    let mut store = InMemoryStore::seeded(now);

    match cli.command {
        Command::Queue(args) => {
            let query = QueueQuery {
                active_tab: args.tab.into(),
                search_term: args.search,
                filter_by: args.category,
                sort_by: args.sort.into(),
            };
            run_queue(&store, query, now);
            Ok(true)
        }
        Command::Dashboard => {
            run_dashboard(&store, config.current_user(), now);
            Ok(true)
        }
        Command::Question(args) => {
            let responder = Responder {
                name: config.current_user().to_string(),
                ..Responder::default()
            };
            let actions = ThreadActions {
                respond: args.respond,
                helpful: args.helpful,
            };
            run_question(&store, args.id, &actions, &responder, now)
        }
        Command::Ask(args) => {
            let draft = draft_from_args(args, &config);
            let tracker = if draft.create_ticket {
                match JiraClient::new() {
                    Ok(client) => Some(client),
                    Err(error) => {
                        warn!(%error, "issue tracker client unavailable");
                        None
                    }
                }
            } else {
                None
            };
            run_ask(
                &mut store,
                draft,
                tracker.as_ref().map(|client| client as &dyn IssueTracker),
                config.current_user(),
                now,
            )
        }
        Command::Messages(args) => {
            let backend_url = config.backend_url(cli.backend_url.as_deref());
            let client = MessageClient::new(&backend_url)
                .with_context(|| format!("connect to message backend {backend_url}"))?;
            match args.action {
                MessagesCommand::List => {
                    run_messages_list(&client);
                    Ok(true)
                }
                MessagesCommand::Send { content } => run_messages_send(&client, &content),
            }
        }
    }
}

fn draft_from_args(args: AskArgs, config: &DeskConfig) -> QuestionDraft {
    let ticket = config.ticket_options(TicketOverrides {
        server_url: args.jira_server_url,
        project_key: args.jira_project_key,
        issue_type: args.jira_issue_type.map(Into::into),
        api_token: args.jira_api_token,
    });
    QuestionDraft {
        title: args.title,
        description: args.description,
        category: args.category,
        priority: args.priority.into(),
        tags: args.tags,
        reviewer_group: args.reviewer_group,
        create_ticket: args.create_ticket,
        ticket,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
