//! Review queue query engine.
//!
//! The visible list is a pure function of the question set and four
//! selectors, applied in a fixed order: tab, search, category, sort.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use qa_model::{Category, ModelError, Question, QuestionStatus};

/// Category selector. `All` is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &question.category == category,
        }
    }

    /// False for a category no question can be filed under.
    pub fn is_known(&self) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => category.is_known(),
        }
    }

    /// Label used in the toolbar ("All Categories" or the category key).
    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All Categories".to_string(),
            CategoryFilter::Only(category) => category.to_string(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::new(s).map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    Priority,
}

impl SortBy {
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Newest => "Newest",
            SortBy::Oldest => "Oldest",
            SortBy::Priority => "Priority",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four selectors that drive the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueQuery {
    pub active_tab: QuestionStatus,
    pub search_term: String,
    pub filter_by: CategoryFilter,
    pub sort_by: SortBy,
}

impl Default for QueueQuery {
    fn default() -> Self {
        Self {
            active_tab: QuestionStatus::Pending,
            search_term: String::new(),
            filter_by: CategoryFilter::All,
            sort_by: SortBy::Newest,
        }
    }
}

impl QueueQuery {
    pub fn for_tab(tab: QuestionStatus) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }
}

/// Case-insensitive substring match against title or author.
pub fn matches_search(question: &Question, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    question.title.to_lowercase().contains(&needle)
        || question.author.to_lowercase().contains(&needle)
}

fn matches_tab(question: &Question, tab: QuestionStatus) -> bool {
    tab != QuestionStatus::Unknown && question.status == tab
}

/// Visible, ordered subset of `questions` for `query`.
///
/// The input slice is never reordered; ties in every sort keep input order.
pub fn visible_questions<'a>(questions: &'a [Question], query: &QueueQuery) -> Vec<&'a Question> {
    let mut visible: Vec<&Question> = questions
        .iter()
        .filter(|question| matches_tab(question, query.active_tab))
        .filter(|question| matches_search(question, &query.search_term))
        .filter(|question| query.filter_by.matches(question))
        .collect();
    sort_questions(&mut visible, query.sort_by);
    debug!(
        tab = %query.active_tab,
        search = %query.search_term,
        filter = %query.filter_by.label(),
        sort = %query.sort_by,
        total = questions.len(),
        visible = visible.len(),
        "queue recomputed"
    );
    visible
}

/// Stable sort by the selected key.
pub fn sort_questions(questions: &mut [&Question], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => questions.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => questions.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::Priority => questions.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
    }
}

/// Per-tab badge counts over the unfiltered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub pending: usize,
    pub in_review: usize,
    pub answered: usize,
}

impl TabCounts {
    pub fn from_questions(questions: &[Question]) -> Self {
        let count = |status: QuestionStatus| {
            questions
                .iter()
                .filter(|question| question.status == status)
                .count()
        };
        Self {
            pending: count(QuestionStatus::Pending),
            in_review: count(QuestionStatus::InReview),
            answered: count(QuestionStatus::Answered),
        }
    }

    pub fn get(&self, status: QuestionStatus) -> usize {
        match status {
            QuestionStatus::Pending => self.pending,
            QuestionStatus::InReview => self.in_review,
            QuestionStatus::Answered => self.answered,
            QuestionStatus::Unknown => 0,
        }
    }
}

/// Message shown when a tab has nothing to list.
pub fn empty_tab_message(tab: QuestionStatus) -> &'static str {
    match tab {
        QuestionStatus::Pending => "No questions are currently pending review.",
        QuestionStatus::InReview => "No questions are currently being reviewed.",
        QuestionStatus::Answered => "No questions have been answered yet.",
        QuestionStatus::Unknown => "No questions found.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_questions;
    use chrono::{TimeZone, Utc};
    use qa_model::QuestionId;

    fn seed() -> Vec<Question> {
        seed_questions(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    fn ids(visible: &[&Question]) -> Vec<u64> {
        visible.iter().map(|question| question.id.get()).collect()
    }

    #[test]
    fn pending_tab_lists_two_seed_questions() {
        let questions = seed();
        let visible = visible_questions(&questions, &QueueQuery::default());
        // Newest first: question 4 is 30 minutes old, question 1 two hours.
        assert_eq!(ids(&visible), vec![4, 1]);
        assert_eq!(TabCounts::from_questions(&questions).pending, 2);
    }

    #[test]
    fn search_is_case_insensitive_on_title_and_author() {
        let questions = seed();
        let query = QueueQuery {
            search_term: "OAUTH".to_string(),
            ..QueueQuery::default()
        };
        assert_eq!(ids(&visible_questions(&questions, &query)), vec![1]);

        let by_author = QueueQuery {
            active_tab: QuestionStatus::InReview,
            search_term: "david".to_string(),
            ..QueueQuery::default()
        };
        assert_eq!(ids(&visible_questions(&questions, &by_author)), vec![5]);
    }

    #[test]
    fn category_filter_narrows_the_tab() {
        let questions = seed();
        let query = QueueQuery {
            filter_by: "security".parse().unwrap(),
            ..QueueQuery::default()
        };
        assert_eq!(ids(&visible_questions(&questions, &query)), vec![4]);

        let unknown = QueueQuery {
            filter_by: "finance".parse().unwrap(),
            ..QueueQuery::default()
        };
        assert!(visible_questions(&questions, &unknown).is_empty());
    }

    #[test]
    fn sort_orders() {
        let questions = seed();
        let mut query = QueueQuery::for_tab(QuestionStatus::InReview);
        assert_eq!(ids(&visible_questions(&questions, &query)), vec![2, 5]);
        query.sort_by = SortBy::Oldest;
        assert_eq!(ids(&visible_questions(&questions, &query)), vec![5, 2]);
        query.sort_by = SortBy::Priority;
        assert_eq!(ids(&visible_questions(&questions, &query)), vec![2, 5]);
    }

    #[test]
    fn priority_ties_keep_input_order() {
        let mut questions = seed();
        for question in &mut questions {
            question.status = QuestionStatus::Answered;
        }
        let query = QueueQuery {
            active_tab: QuestionStatus::Answered,
            sort_by: SortBy::Priority,
            ..QueueQuery::default()
        };
        // urgent(4), high(2), medium(1, 5), low(3)
        assert_eq!(ids(&visible_questions(&questions, &query)), vec![4, 2, 1, 5, 3]);
    }

    #[test]
    fn unknown_tab_matches_nothing() {
        let mut questions = seed();
        questions[0].status = QuestionStatus::Unknown;
        let query = QueueQuery::for_tab(QuestionStatus::Unknown);
        assert!(visible_questions(&questions, &query).is_empty());
        assert_eq!(TabCounts::from_questions(&questions).get(QuestionStatus::Unknown), 0);
    }

    #[test]
    fn tab_counts_ignore_search() {
        let questions = seed();
        let counts = TabCounts::from_questions(&questions);
        assert_eq!(
            (counts.pending, counts.in_review, counts.answered),
            (2, 2, 1)
        );
        assert_eq!(counts.get(QuestionStatus::InReview), 2);
    }

    #[test]
    fn source_slice_is_untouched() {
        let questions = seed();
        let before: Vec<QuestionId> = questions.iter().map(|question| question.id).collect();
        let query = QueueQuery {
            sort_by: SortBy::Priority,
            ..QueueQuery::default()
        };
        let _ = visible_questions(&questions, &query);
        let after: Vec<QuestionId> = questions.iter().map(|question| question.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.label(), "All Categories");
        assert!(" ".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn filter_ignores_case_of_the_key() {
        let questions = seed();
        let query = QueueQuery {
            filter_by: " Security ".parse().unwrap(),
            ..QueueQuery::default()
        };
        assert_eq!(ids(&visible_questions(&questions, &query)), vec![4]);
    }

    #[test]
    fn known_filters() {
        assert!(CategoryFilter::All.is_known());
        assert!("Tools".parse::<CategoryFilter>().unwrap().is_known());
        assert!(!"finance".parse::<CategoryFilter>().unwrap().is_known());
    }
}
