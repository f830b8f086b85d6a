use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Warning,
    Error,
}

/// A message shown to the shopper (rendered as a toast).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub created_at: i64,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Utc::now().timestamp(),
        }
    }
}

/// Broadcast to every open page through `/events`.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Updated,
    Notice(Notice),
}
