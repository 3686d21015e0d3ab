//! Question sources.
//!
//! The query engine only sees `QuestionRepository::list`, so it does not care
//! whether questions come from the seed set or anywhere else.

use chrono::{DateTime, Utc};
use tracing::debug;

use qa_model::{Question, QuestionId, Response};

use crate::seed::{seed_questions, seed_responses};

pub trait QuestionRepository {
    /// All questions in insertion order.
    fn list(&self) -> Vec<Question>;

    fn get(&self, id: QuestionId) -> Option<Question> {
        self.list().into_iter().find(|question| question.id == id)
    }

    /// Discussion thread already attached to a question.
    fn responses(&self, id: QuestionId) -> Vec<Response>;
}

/// Session-scoped store. Append-only; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    questions: Vec<Question>,
    seeded_at: Option<DateTime<Utc>>,
}

impl InMemoryStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            seeded_at: None,
        }
    }

    /// Store holding the fixed seed set, aged relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let questions = seed_questions(now);
        debug!(count = questions.len(), "seeded question store");
        Self {
            questions,
            seeded_at: Some(now),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Next free id: one past the largest id in the store.
    pub fn next_id(&self) -> QuestionId {
        let max = self
            .questions
            .iter()
            .map(|question| question.id.get())
            .max()
            .unwrap_or(0);
        QuestionId::new(max + 1)
    }

    pub fn append(&mut self, question: Question) {
        debug!(id = %question.id, "question appended");
        self.questions.push(question);
    }
}

impl QuestionRepository for InMemoryStore {
    fn list(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn responses(&self, id: QuestionId) -> Vec<Response> {
        match self.seeded_at {
            Some(now) => seed_responses(id, now),
            None => Vec::new(),
        }
    }
}
