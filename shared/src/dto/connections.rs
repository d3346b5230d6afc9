use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::UserSummary;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Declined,
}

/// A match between the current user and another member of the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub user: UserSummary,
    pub status: ConnectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Connection {
    pub fn is_pending(&self) -> bool {
        self.status == ConnectionStatus::Pending
    }
}

pub fn accepted_connections(connections: &[Connection]) -> Vec<&Connection> {
    connections
        .iter()
        .filter(|connection| connection.status == ConnectionStatus::Accepted)
        .collect()
}
