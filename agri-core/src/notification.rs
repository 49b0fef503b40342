//! User-facing notifications.

use crate::record_id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied part of a [`Notification`]; the store assigns id,
/// timestamp and the unread flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    /// Shown to every new session until the farmer registers.
    pub fn welcome() -> Self {
        Self::new(
            NotificationKind::Info,
            "Welcome to AgriChain",
            "Complete your registration to access all features",
        )
    }

    pub fn registration_complete() -> Self {
        Self::new(
            NotificationKind::Success,
            "Registration Complete!",
            "Your Farmer NFT has been created. Welcome to AgriChain!",
        )
    }

    pub fn into_notification(self, id: RecordId, timestamp: DateTime<Utc>) -> Notification {
        Notification {
            id,
            title: self.title,
            message: self.message,
            kind: self.kind,
            read: false,
            timestamp,
        }
    }
}
