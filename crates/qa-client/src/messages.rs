//! Client for the local message backend.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use qa_core::{ApiError, MessageApi};
use qa_model::Message;

use crate::error::Result;
use crate::http::{REQUEST_TIMEOUT, build_client, check_status, normalize_base_url, read_json};

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Default, Deserialize)]
struct MessageList {
    #[serde(default)]
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct NewMessage<'a> {
    message: NewMessageContent<'a>,
}

#[derive(Debug, Serialize)]
struct NewMessageContent<'a> {
    content: &'a str,
}

/// Client for `GET/POST {backend}/messages`.
#[derive(Debug, Clone)]
pub struct MessageClient {
    client: Client,
    base_url: String,
}

impl MessageClient {
    /// Create a client for `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    /// Fetch all messages in backend order.
    pub fn fetch(&self) -> Result<Vec<Message>> {
        debug!(url = %self.messages_url(), "fetching messages");
        let response = self
            .client
            .get(self.messages_url())
            .header(ACCEPT, "application/json")
            .send()?;
        let list: MessageList = read_json(check_status(response)?)?;
        Ok(list.messages)
    }

    /// Post one message. A success status with an unreadable body is a
    /// `JsonParse` error.
    pub fn send(&self, content: &str) -> Result<()> {
        let body = NewMessage {
            message: NewMessageContent { content },
        };
        let response = self
            .client
            .post(self.messages_url())
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()?;
        let _: IgnoredAny = read_json(check_status(response)?)?;
        info!(chars = content.chars().count(), "message posted");
        Ok(())
    }
}

impl MessageApi for MessageClient {
    fn list_messages(&self) -> std::result::Result<Vec<Message>, ApiError> {
        self.fetch().map_err(ApiError::from)
    }

    fn post_message(&self, content: &str) -> std::result::Result<(), ApiError> {
        self.send(content).map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_body_wraps_content() {
        let body = NewMessage {
            message: NewMessageContent { content: "hi" },
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":{"content":"hi"}}"#
        );
    }

    #[test]
    fn missing_messages_key_is_an_empty_list() {
        let list: MessageList = serde_json::from_str("{}").unwrap();
        assert!(list.messages.is_empty());
    }

    #[test]
    fn messages_url_has_no_double_slash() {
        let client = MessageClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.messages_url(), "http://localhost:8080/messages");
    }
}
