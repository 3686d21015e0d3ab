//! Shared blocking HTTP plumbing.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error envelope returned by both services on failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("qa-desk/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ClientError::from)
}

/// Strips trailing slashes and rejects anything that is not http(s).
pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ClientError::InvalidUrl(raw.to_string()))
    }
}

/// Fails on non-2xx, pulling the `error` field out of the body when present.
pub(crate) fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.error);
    debug!(status = status.as_u16(), ?message, "request rejected");
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

pub(crate) fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}
