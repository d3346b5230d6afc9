use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /notifications`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, alias = "isRead")]
    pub read: bool,
    /// Free-form category (`CONNECTION`, `WALLET`, `KYC`, ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

pub fn unread_only(notifications: &[Notification]) -> Vec<&Notification> {
    notifications.iter().filter(|n| !n.read).collect()
}

/// Newest first; ties keep their original order.
pub fn sort_notifications_newest_first(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
