//! User-visible notices emitted by the cart validation pass.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
}

/// A notice for display to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Sink for notices; the host renders whatever accumulates here.
pub trait NoticeSink {
    fn push(&mut self, notice: Notice);
}

/// Vec-backed sink for tests/dev.
#[derive(Debug, Default)]
pub struct CollectedNotices {
    notices: Vec<Notice>,
}

impl CollectedNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl NoticeSink for CollectedNotices {
    fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
