//! In-app notifications.
//!
//! Notifications are synthesized by store mutations (an event invitation, a
//! cancelled booking) and only ever transition from unread to read. They are
//! never deleted in normal operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub target: NotificationTarget,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    /// The event this notification refers to, when there is one.
    pub event_id: Option<String>,
}

impl Notification {
    pub fn new(target: NotificationTarget, title: &str, message: &str) -> Self {
        Notification {
            id: Uuid::new_v4().to_string(),
            target,
            title: title.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
            read: false,
            event_id: None,
        }
    }

    pub fn for_event(target: NotificationTarget, title: &str, message: &str, event_id: &str) -> Self {
        Notification {
            event_id: Some(event_id.to_string()),
            ..Self::new(target, title, message)
        }
    }
}

/// Who a notification is addressed to: one artist, or everybody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTarget {
    All,
    Artist(String),
}

impl NotificationTarget {
    pub fn includes(&self, artist_id: &str) -> bool {
        match self {
            NotificationTarget::All => true,
            NotificationTarget::Artist(id) => id == artist_id,
        }
    }
}
