//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification type tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    BookingCreated,
    BookingCancelled,
    PaymentReceived,
    CommissionUpdated,
    System,
    /// Tags introduced by newer backends decode here instead of failing
    #[serde(other)]
    Other,
}

/// Sender or receiver of a notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

/// Notification entity
///
/// Created by the backend when an event occurs; the only client-side
/// mutation is the read-flag transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub sender: Option<Actor>,
    pub receiver: Option<Actor>,
    pub title: Option<String>,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
