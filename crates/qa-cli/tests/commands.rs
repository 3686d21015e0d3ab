//! Command outcomes against the seeded store and a fake message backend.

use std::cell::RefCell;

use chrono::{DateTime, TimeZone, Utc};

use anyhow::Context;

use qa_cli::commands::{
    ThreadActions, error_report, run_ask, run_messages_send, run_queue, run_question,
    send_message,
};
use qa_cli::summary::tab_bar;
use qa_core::{
    ApiError, InMemoryStore, MessageApi, QuestionDraft, QuestionRepository, QueueAction,
    QueueQuery, QueueState, Responder,
};
use qa_client::MessageClient;
use qa_model::{Message, MessageId, QuestionId, QuestionStatus, ResponseId};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

#[derive(Default)]
struct FakeBackend {
    posted: RefCell<Vec<String>>,
    reject: bool,
}

impl MessageApi for FakeBackend {
    fn list_messages(&self) -> Result<Vec<Message>, ApiError> {
        Ok(self
            .posted
            .borrow()
            .iter()
            .enumerate()
            .map(|(index, content)| Message {
                id: MessageId::Number(index as u64 + 1),
                content: content.clone(),
                created_at: String::new(),
            })
            .collect())
    }

    fn post_message(&self, content: &str) -> Result<(), ApiError> {
        if self.reject {
            return Err(ApiError::Rejected {
                status: 500,
                message: None,
            });
        }
        self.posted.borrow_mut().push(content.to_string());
        Ok(())
    }
}

#[test]
fn tab_bar_follows_selected_tab() {
    let questions = InMemoryStore::seeded(now()).list();
    let state = QueueState::default().apply_all([
        QueueAction::SelectTab(QuestionStatus::Answered),
        QueueAction::Search("zzz".to_string()),
    ]);
    insta::assert_snapshot!(
        tab_bar(&state.view(&questions)),
        @"Pending Review (2)  In Review (2)  [Answered (1)]"
    );
}

#[test]
fn ask_with_missing_fields_fails_without_storing() {
    let mut store = InMemoryStore::seeded(now());
    let ok = run_ask(&mut store, QuestionDraft::default(), None, "Mike Chen", now()).unwrap();
    assert!(!ok);
    assert_eq!(store.len(), 5);
}

#[test]
fn ask_stores_question() {
    let mut store = InMemoryStore::seeded(now());
    let draft = QuestionDraft {
        title: "Which logging format do we ship?".to_string(),
        description: "Pretty or JSON in production?".to_string(),
        category: "tools".to_string(),
        reviewer_group: "devops-team".to_string(),
        ..QuestionDraft::default()
    };
    assert!(run_ask(&mut store, draft, None, "Mike Chen", now()).unwrap());
    let stored = store.get(QuestionId::new(6)).unwrap();
    assert_eq!(stored.reviewer_group, "DevOps Team");
}

#[test]
fn question_command_reports_blank_reply_and_missing_ids() {
    let store = InMemoryStore::seeded(now());
    let blank = ThreadActions {
        respond: Some("   ".to_string()),
        helpful: None,
    };
    assert!(!run_question(&store, QuestionId::new(1), &blank, &Responder::default(), now()).unwrap());

    let vote = ThreadActions {
        respond: None,
        helpful: Some(ResponseId::new(1)),
    };
    assert!(run_question(&store, QuestionId::new(1), &vote, &Responder::default(), now()).unwrap());
    assert!(run_question(&store, QuestionId::new(99), &vote, &Responder::default(), now()).is_err());
}

#[test]
fn message_send_outcomes() {
    let backend = FakeBackend::default();
    assert!(run_messages_send(&backend, "  deploy at noon ").unwrap());
    assert_eq!(backend.posted.borrow().as_slice(), ["deploy at noon"]);

    assert!(!run_messages_send(&backend, "   ").unwrap());

    let rejecting = FakeBackend {
        reject: true,
        ..FakeBackend::default()
    };
    assert!(!run_messages_send(&rejecting, "hello").unwrap());
}

#[test]
fn rejected_send_keeps_loaded_messages() {
    let backend = FakeBackend {
        posted: RefCell::new(vec![
            "standup moved".to_string(),
            "deploy at noon".to_string(),
            "retro notes are up".to_string(),
        ]),
        reject: true,
    };
    let (board, sent) = send_message(&backend, "hello").unwrap();

    assert!(!sent);
    assert_eq!(board.messages().len(), 3);
    assert_eq!(board.recent()[0].content, "standup moved");
    assert_eq!(board.content(), "hello");
    assert_eq!(
        board.banner().map(|banner| banner.message.as_str()),
        Some("Failed to send message")
    );
}

#[test]
fn client_errors_report_their_user_message() {
    let error = MessageClient::new("localhost:8080")
        .context("connect to message backend localhost:8080")
        .unwrap_err();
    assert_eq!(
        error_report(&error),
        "connect to message backend localhost:8080: The configured server URL is not valid."
    );

    let other = anyhow::anyhow!("config file missing").context("load config");
    assert_eq!(error_report(&other), "load config: config file missing");
}

#[test]
fn queue_with_unknown_category_prints_empty_tab() {
    let store = InMemoryStore::seeded(now());
    let query = QueueQuery {
        filter_by: "finance".parse().unwrap(),
        ..QueueQuery::default()
    };
    assert!(!query.filter_by.is_known());
    run_queue(&store, query, now());
}
