use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platform role. Decides which navigation tree and journey a user sees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Surrogate,
    Donor,
    Agency,
    IntendedParent,
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Surrogate,
        Role::Donor,
        Role::Agency,
        Role::IntendedParent,
        Role::Admin,
    ];

    /// Wire value, as used in JSON bodies and the `role` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Surrogate => "SURROGATE",
            Role::Donor => "DONOR",
            Role::Agency => "AGENCY",
            Role::IntendedParent => "INTENDED_PARENT",
            Role::Admin => "ADMIN",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Surrogate => "Surrogate",
            Role::Donor => "Donor",
            Role::Agency => "Agency",
            Role::IntendedParent => "Intended Parent",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts wire values and loose spellings (`intended-parent`, `Donor`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Snapshot of the logged-in user (safe to keep client side)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl UserSummary {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: String::new(),
            role,
            first_name: None,
            last_name: None,
        }
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// Authentication response (login success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Registration response.
///
/// Accounts that still need OTP confirmation come back without a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

/// Request a fresh one-time password for email confirmation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResendOtpRequest {
    pub email: String,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the API. Either field may be used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}
