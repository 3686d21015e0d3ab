//! Configuration file loading.

use std::io::Write;

use qa_cli::config::{DEFAULT_CURRENT_USER, DeskConfig, TicketOverrides};
use qa_client::DEFAULT_BACKEND_URL;
use qa_model::IssueType;

#[test]
fn loads_full_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
backend_url = "http://backend.internal:9090"
current_user = "Mike Chen"

[jira]
server_url = "https://tracker.example.com"
project_key = "QA"
issue_type = "Story"
api_token = "secret"
"#
    )
    .unwrap();

    let config = DeskConfig::load(file.path()).unwrap();
    assert_eq!(config.backend_url(None), "http://backend.internal:9090");
    assert_eq!(config.current_user(), "Mike Chen");

    let options = config.ticket_options(TicketOverrides::default());
    assert_eq!(options.project_key, "QA");
    assert_eq!(options.issue_type, IssueType::Story);
    assert_eq!(options.api_token, "secret");
}

#[test]
fn missing_path_means_defaults() {
    let config = DeskConfig::load_optional(None).unwrap();
    assert_eq!(config.backend_url(None), DEFAULT_BACKEND_URL);
    assert_eq!(config.current_user(), DEFAULT_CURRENT_USER);
}

#[test]
fn unreadable_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let error = DeskConfig::load(&path).unwrap_err();
    assert!(format!("{error:#}").contains("missing.toml"));
}

#[test]
fn malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "backend_url = [").unwrap();
    let error = DeskConfig::load(file.path()).unwrap_err();
    assert!(error.to_string().starts_with("parse config"));
}
