//! Question detail page: the question plus its response thread.

use chrono::{DateTime, Utc};
use tracing::info;

use qa_model::{Question, QuestionId, Response, ResponseId};

use crate::banner::Banner;
use crate::error::{CoreError, Result};
use crate::form::validate_message;
use crate::repository::QuestionRepository;

pub const RESPONSE_ADDED_MESSAGE: &str =
    "Response submitted! Your response has been added to the discussion.";

/// Identity used for replies typed in this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responder {
    pub name: String,
    pub role: String,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            name: "Current User".to_string(),
            role: "Developer".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Thread {
    pub question: Question,
    pub responses: Vec<Response>,
    banner: Option<Banner>,
}

impl Thread {
    pub fn load(repository: &dyn QuestionRepository, id: QuestionId) -> Result<Self> {
        let question = repository.get(id).ok_or(CoreError::QuestionNotFound(id))?;
        Ok(Self {
            responses: repository.responses(id),
            question,
            banner: None,
        })
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Appends a reply from `responder`.
    ///
    /// # Errors
    ///
    /// `CoreError::Invalid` when the reply is blank.
    pub fn add_response(
        &mut self,
        content: &str,
        responder: &Responder,
        now: DateTime<Utc>,
    ) -> Result<&Response> {
        let content = validate_message(content).map_err(CoreError::Invalid)?;
        let id = ResponseId::new(self.responses.len() as u64 + 1);
        self.responses.push(Response {
            id,
            author: responder.name.clone(),
            author_avatar: String::new(),
            role: responder.role.clone(),
            content,
            created_at: now,
            helpful: 0,
            is_reviewer: false,
        });
        info!(question = %self.question.id, response = %id, "response added");
        self.banner = Some(Banner::success(RESPONSE_ADDED_MESSAGE));
        Ok(&self.responses[self.responses.len() - 1])
    }

    /// Increments the helpful counter and returns the new value.
    pub fn mark_helpful(&mut self, id: ResponseId) -> Result<u32> {
        let response = self
            .responses
            .iter_mut()
            .find(|response| response.id == id)
            .ok_or(CoreError::ResponseNotFound(id))?;
        response.helpful += 1;
        Ok(response.helpful)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn reply_is_appended_with_next_id() {
        let store = InMemoryStore::seeded(now());
        let mut thread = Thread::load(&store, QuestionId::new(1)).unwrap();
        let reply = thread
            .add_response("  Thanks, that helps!  ", &Responder::default(), now())
            .unwrap();
        assert_eq!(reply.id, ResponseId::new(3));
        assert_eq!(reply.content, "Thanks, that helps!");
        assert_eq!(reply.author, "Current User");
        assert!(!reply.is_reviewer);
        assert_eq!(thread.responses.len(), 3);
        assert_eq!(
            thread.banner().map(|banner| banner.message.as_str()),
            Some(RESPONSE_ADDED_MESSAGE)
        );
    }

    #[test]
    fn blank_reply_is_rejected() {
        let store = InMemoryStore::seeded(now());
        let mut thread = Thread::load(&store, QuestionId::new(2)).unwrap();
        assert!(matches!(
            thread.add_response("  ", &Responder::default(), now()),
            Err(CoreError::Invalid(_))
        ));
        assert!(thread.responses.is_empty());
        assert!(thread.banner().is_none());
    }

    #[test]
    fn helpful_votes_accumulate() {
        let store = InMemoryStore::seeded(now());
        let mut thread = Thread::load(&store, QuestionId::new(1)).unwrap();
        assert_eq!(thread.mark_helpful(ResponseId::new(2)).unwrap(), 4);
        assert_eq!(thread.mark_helpful(ResponseId::new(2)).unwrap(), 5);
        assert!(matches!(
            thread.mark_helpful(ResponseId::new(9)),
            Err(CoreError::ResponseNotFound(_))
        ));
    }

    #[test]
    fn missing_question_is_reported() {
        let store = InMemoryStore::seeded(now());
        assert!(matches!(
            Thread::load(&store, QuestionId::new(42)),
            Err(CoreError::QuestionNotFound(_))
        ));
    }
}
