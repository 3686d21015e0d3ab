use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::MessageId;

/// A message as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    /// Timestamp exactly as the backend sent it.
    #[serde(default)]
    pub created_at: String,
}

impl Message {
    /// Local-time rendering of `created_at`, or the raw value when it is not RFC 3339.
    pub fn display_time(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(parsed) => parsed
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}
