//! Immutable review queue state and its update function.

use qa_model::{Question, QuestionStatus};

use crate::query::{CategoryFilter, QueueQuery, SortBy, TabCounts, visible_questions};

/// One user interaction with the queue toolbar or tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueAction {
    SelectTab(QuestionStatus),
    Search(String),
    Filter(CategoryFilter),
    Sort(SortBy),
    /// Back to the default selectors.
    Reset,
}

/// Everything the queue view needs to remember between interactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueState {
    pub query: QueueQuery,
}

impl QueueState {
    pub fn new(query: QueueQuery) -> Self {
        Self { query }
    }

    /// Applies every action in order, starting from `self`.
    #[must_use]
    pub fn apply_all(&self, actions: impl IntoIterator<Item = QueueAction>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| reduce(&state, action))
    }

    /// Derived data for rendering.
    pub fn view<'a>(&self, questions: &'a [Question]) -> QueueView<'a> {
        QueueView {
            tab_counts: TabCounts::from_questions(questions),
            items: visible_questions(questions, &self.query),
            active_tab: self.query.active_tab,
        }
    }
}

/// Returns the state that follows `state` after `action`.
pub fn reduce(state: &QueueState, action: QueueAction) -> QueueState {
    let mut query = state.query.clone();
    match action {
        QueueAction::SelectTab(tab) => query.active_tab = tab,
        QueueAction::Search(term) => query.search_term = term,
        QueueAction::Filter(filter) => query.filter_by = filter,
        QueueAction::Sort(sort) => query.sort_by = sort,
        QueueAction::Reset => query = QueueQuery::default(),
    }
    QueueState { query }
}

/// Output of one recomputation: badge counts plus the visible items.
#[derive(Debug, Clone)]
pub struct QueueView<'a> {
    pub tab_counts: TabCounts,
    pub items: Vec<&'a Question>,
    pub active_tab: QuestionStatus,
}
