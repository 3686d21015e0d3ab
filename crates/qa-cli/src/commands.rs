//! Command implementations. Each returns `Ok(false)` when the user-facing
//! operation failed in a way already reported on stderr.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, info_span, warn};

use qa_client::ClientError;
use qa_core::{
    CoreError, DashboardStats, InMemoryStore, IssueTracker, MessageApi, MessageBoard,
    QuestionDraft, QuestionForm, QuestionRepository, QueueQuery, QueueState, RECENT_LIMIT,
    Responder, Thread, recent_questions,
};
use qa_model::{KNOWN_CATEGORIES, QuestionId, ResponseId};

use crate::summary::{
    print_banner, print_dashboard, print_field_errors, print_messages, print_queue, print_thread,
};

pub fn run_queue(repository: &dyn QuestionRepository, query: QueueQuery, now: DateTime<Utc>) {
    if !query.filter_by.is_known() {
        warn!(
            category = %query.filter_by.label(),
            known = %KNOWN_CATEGORIES.join(", "),
            "unknown category filter matches no question"
        );
    }
    let questions = repository.list();
    let state = QueueState::new(query);
    let view = state.view(&questions);
    print_queue(&view, &state.query, now);
}

pub fn run_dashboard(repository: &dyn QuestionRepository, current_user: &str, now: DateTime<Utc>) {
    let questions = repository.list();
    let stats = DashboardStats::compute(&questions, current_user);
    let recent = recent_questions(&questions, RECENT_LIMIT);
    print_dashboard(&stats, &recent, now);
}

/// Replies to and votes on a question, then prints its thread.
pub struct ThreadActions {
    pub respond: Option<String>,
    pub helpful: Option<ResponseId>,
}

pub fn run_question(
    repository: &dyn QuestionRepository,
    id: QuestionId,
    actions: &ThreadActions,
    responder: &Responder,
    now: DateTime<Utc>,
) -> Result<bool> {
    let mut thread = Thread::load(repository, id).context("load question")?;

    if let Some(response_id) = actions.helpful {
        let votes = thread
            .mark_helpful(response_id)
            .with_context(|| format!("mark response {response_id} helpful"))?;
        info!(response = %response_id, votes, "marked helpful");
    }

    let mut ok = true;
    if let Some(content) = &actions.respond {
        match thread.add_response(content, responder, now) {
            Ok(_) => {}
            Err(CoreError::Invalid(errors)) => {
                print_field_errors(&errors);
                ok = false;
            }
            Err(error) => return Err(error).context("add response"),
        }
    }

    print_thread(&thread, now);
    Ok(ok)
}

pub fn run_ask(
    store: &mut InMemoryStore,
    draft: QuestionDraft,
    tracker: Option<&dyn IssueTracker>,
    author: &str,
    now: DateTime<Utc>,
) -> Result<bool> {
    let span = info_span!("ask", author = %author);
    let _guard = span.enter();

    let mut form = QuestionForm::new(draft);
    let submission = match form.submit(store, tracker, author, now) {
        Ok(submission) => submission,
        Err(CoreError::Invalid(errors)) => {
            warn!(fields = errors.len(), "question rejected by validation");
            print_field_errors(&errors);
            return Ok(false);
        }
        Err(error) => return Err(error).context("submit question"),
    };

    if let Some(banner) = form.error() {
        print_banner(banner);
    }
    if let Some(banner) = form.success() {
        print_banner(banner);
    }
    println!(
        "Question #{} is pending review. Redirecting to {} in {}s.",
        submission.question.id,
        submission.redirect.route,
        submission.redirect.after.as_secs()
    );
    run_dashboard(&*store, author, now);
    Ok(true)
}

pub fn run_messages_list(api: &dyn MessageApi) {
    print_messages(&MessageBoard::load(api));
}

pub fn run_messages_send(api: &dyn MessageApi, content: &str) -> Result<bool> {
    let (board, sent) = send_message(api, content)?;
    print_messages(&board);
    Ok(sent)
}

/// Loads the board, posts `content`, and returns the board with whether the
/// post succeeded. A failed post keeps the previously loaded list.
pub fn send_message(api: &dyn MessageApi, content: &str) -> Result<(MessageBoard, bool)> {
    let mut board = MessageBoard::load(api);
    board.set_content(content);
    match board.submit(api) {
        Ok(banner) => Ok((board, banner.is_success())),
        Err(CoreError::Invalid(errors)) => {
            print_field_errors(&errors);
            Ok((board, false))
        }
        Err(error) => Err(error).context("send message"),
    }
}

/// Text for the `error:` line. Client failures end with their user message.
pub fn error_report(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ClientError>() {
        Some(client) => format!("{error}: {}", client.user_message()),
        None => format!("{error:#}"),
    }
}
