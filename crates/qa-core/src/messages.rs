//! Message form backed by the local message service.
//!
//! Unlike question submission, a failed post is a failed submission: the
//! draft stays in place so the user can send it again.

use tracing::{debug, info, warn};

use qa_model::Message;

use crate::banner::Banner;
use crate::error::{ApiError, CoreError, Result};
use crate::form::validate_message;

/// How many messages the "Recent Messages" list shows.
pub const RECENT_MESSAGES: usize = 10;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check if the backend is running.";

pub trait MessageApi {
    fn list_messages(&self) -> std::result::Result<Vec<Message>, ApiError>;
    fn post_message(&self, content: &str) -> std::result::Result<(), ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct MessageBoard {
    content: String,
    messages: Vec<Message>,
    loading: bool,
    validated: bool,
    banner: Option<Banner>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A board with the backend's current list already fetched.
    pub fn load(api: &dyn MessageApi) -> Self {
        let mut board = Self::new();
        board.refresh(api);
        board
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The first `RECENT_MESSAGES` messages in backend order.
    pub fn recent(&self) -> &[Message] {
        let end = self.messages.len().min(RECENT_MESSAGES);
        &self.messages[..end]
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn validated(&self) -> bool {
        self.validated
    }

    /// Send is allowed only with non-blank content and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.content.trim().is_empty()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Reloads the list. Failures are logged and leave the list as it was.
    pub fn refresh(&mut self, api: &dyn MessageApi) {
        match api.list_messages() {
            Ok(messages) => {
                debug!(count = messages.len(), "messages fetched");
                self.messages = messages;
            }
            Err(error) => warn!(%error, "error fetching messages"),
        }
    }

    /// Posts the current draft and returns the resulting banner.
    ///
    /// # Errors
    ///
    /// `CoreError::Invalid` when the content is blank; no request is made.
    pub fn submit(&mut self, api: &dyn MessageApi) -> Result<Banner> {
        let content = match validate_message(&self.content) {
            Ok(content) => content,
            Err(errors) => {
                self.validated = true;
                return Err(CoreError::Invalid(errors));
            }
        };

        self.loading = true;
        self.banner = None;
        let outcome = api.post_message(&content);
        self.loading = false;

        let banner = match outcome {
            Ok(()) => {
                info!(chars = content.chars().count(), "message sent");
                self.content.clear();
                self.validated = false;
                self.refresh(api);
                Banner::success(SENT_MESSAGE)
            }
            Err(ApiError::Rejected { status, message }) => {
                warn!(status, "message rejected");
                Banner::danger(message.unwrap_or_else(|| SEND_FAILED_MESSAGE.to_string()))
            }
            Err(error) => {
                warn!(%error, "message not sent");
                Banner::danger(NETWORK_ERROR_MESSAGE)
            }
        };
        self.banner = Some(banner.clone());
        Ok(banner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use qa_model::MessageId;

    use crate::form::Field;

    struct FakeApi {
        stored: RefCell<Vec<Message>>,
        post_result: std::result::Result<(), ApiError>,
        list_fails: bool,
    }

    impl FakeApi {
        fn accepting() -> Self {
            Self {
                stored: RefCell::new(Vec::new()),
                post_result: Ok(()),
                list_fails: false,
            }
        }

        fn failing(error: ApiError) -> Self {
            Self {
                post_result: Err(error),
                ..Self::accepting()
            }
        }
    }

    impl MessageApi for FakeApi {
        fn list_messages(&self) -> std::result::Result<Vec<Message>, ApiError> {
            if self.list_fails {
                return Err(ApiError::Transport("refused".to_string()));
            }
            Ok(self.stored.borrow().clone())
        }

        fn post_message(&self, content: &str) -> std::result::Result<(), ApiError> {
            self.post_result.clone()?;
            let mut stored = self.stored.borrow_mut();
            let id = stored.len() as u64 + 1;
            stored.push(Message {
                id: MessageId::Number(id),
                content: content.to_string(),
                created_at: String::new(),
            });
            Ok(())
        }
    }

    #[test]
    fn successful_send_clears_draft_and_refetches() {
        let api = FakeApi::accepting();
        let mut board = MessageBoard::new();
        board.set_content("  hello team  ");
        let banner = board.submit(&api).unwrap();
        assert_eq!(banner, Banner::success(SENT_MESSAGE));
        assert_eq!(board.content(), "");
        assert!(!board.is_loading());
        assert_eq!(board.messages().len(), 1);
        assert_eq!(board.messages()[0].content, "hello team");
    }

    #[test]
    fn load_fetches_list_and_tolerates_failure() {
        let api = FakeApi::accepting();
        api.post_message("first").unwrap();
        assert_eq!(MessageBoard::load(&api).messages().len(), 1);

        let down = FakeApi {
            list_fails: true,
            ..FakeApi::accepting()
        };
        let board = MessageBoard::load(&down);
        assert!(board.messages().is_empty());
        assert!(board.banner().is_none());
    }

    #[test]
    fn blank_content_is_not_sent() {
        let api = FakeApi::accepting();
        let mut board = MessageBoard::new();
        board.set_content("   ");
        assert!(!board.can_submit());
        match board.submit(&api) {
            Err(CoreError::Invalid(errors)) => assert!(errors.contains(Field::Content)),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(board.validated());
        assert!(api.stored.borrow().is_empty());
    }

    #[test]
    fn rejected_send_uses_server_error_and_keeps_draft() {
        let api = FakeApi::failing(ApiError::Rejected {
            status: 422,
            message: Some("Content too long".to_string()),
        });
        let mut board = MessageBoard::new();
        board.set_content("draft");
        let banner = board.submit(&api).unwrap();
        assert_eq!(banner, Banner::danger("Content too long"));
        assert_eq!(board.content(), "draft");
        assert!(!board.is_loading());

        let api = FakeApi::failing(ApiError::Rejected {
            status: 500,
            message: None,
        });
        assert_eq!(
            board.submit(&api).unwrap(),
            Banner::danger(SEND_FAILED_MESSAGE)
        );
    }

    #[test]
    fn transport_failure_reports_network_error() {
        let api = FakeApi::failing(ApiError::Transport("connection refused".to_string()));
        let mut board = MessageBoard::new();
        board.set_content("draft");
        let banner = board.submit(&api).unwrap();
        assert_eq!(banner.message, NETWORK_ERROR_MESSAGE);
        board.dismiss_banner();
        assert!(board.banner().is_none());
    }

    #[test]
    fn failed_refresh_keeps_existing_list() {
        let mut api = FakeApi::accepting();
        let mut board = MessageBoard::new();
        board.set_content("first");
        board.submit(&api).unwrap();
        api.list_fails = true;
        board.refresh(&api);
        assert_eq!(board.messages().len(), 1);
    }

    #[test]
    fn recent_is_capped() {
        let api = FakeApi::accepting();
        let mut board = MessageBoard::new();
        for index in 0..12 {
            board.set_content(format!("message {index}"));
            board.submit(&api).unwrap();
        }
        assert_eq!(board.messages().len(), 12);
        assert_eq!(board.recent().len(), RECENT_MESSAGES);
    }
}
