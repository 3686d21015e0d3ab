use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Danger,
}

/// Dismissible alert produced by a form flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Danger,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == BannerKind::Success
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BannerKind::Success => write!(f, "Success! {}", self.message),
            BannerKind::Danger => write!(f, "Error! {}", self.message),
        }
    }
}
