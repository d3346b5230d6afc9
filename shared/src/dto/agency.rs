//! Referral and agency roster DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::Role;

/// Response of `GET /referrals/code`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCode {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(default)]
    pub referred_count: u32,
}

/// Where a roster member currently stands with the agency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RosterStatus {
    Invited,
    #[default]
    Active,
    Matched,
    Inactive,
}

/// A surrogate, donor or intended parent managed by an agency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub status: RosterStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Response of `GET /agencies/{id}/roster`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgencyRoster {
    pub agency_id: String,
    #[serde(default)]
    pub members: Vec<RosterMember>,
}

impl AgencyRoster {
    /// Members holding the given role.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &RosterMember> {
        self.members.iter().filter(move |member| member.role == role)
    }
}
