//! # Error Types
//!
//! Every failure that crosses the client boundary is an [`ApiError`], so
//! screens branch on [`ErrorKind`] and never on transport-specific error types
//! or raw status codes.
//!
//! ## Error Kinds
//!
//! - **Network**: no response received (offline, DNS, TLS, connection refused)
//! - **Timeout**: the transport gave up waiting for a response
//! - **Auth**: 401/403, or an authenticated call attempted without a session
//! - **Validation**: 400/422, the server rejected the input; `details` carries the body
//! - **Server**: any 5xx
//! - **Unknown**: everything else, including malformed JSON on a success status
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use surromatch_client::core::error::{ApiError, ErrorKind};
//!
//! fn present(err: &ApiError) -> String {
//!     match err.kind {
//!         ErrorKind::Auth => "redirect to login".to_string(),
//!         ErrorKind::Validation => format!("inline: {:?}", err.details),
//!         _ => err.user_message(),
//!     }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Network,
    Timeout,
    Auth,
    Validation,
    Server,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "NETWORK",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::Auth => "AUTH",
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Server => "SERVER",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized failure of an API call.
///
/// `message` is diagnostic text and may contain transport details; use
/// [`ApiError::user_message`] for anything shown to a user.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{kind} error: {message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            details: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Auth, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Server, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Text safe to show on screen. Internal error text is never leaked for
    /// network, server or unknown failures.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::Auth => "Your session has expired. Please log in again.".to_string(),
            ErrorKind::Validation if !self.message.trim().is_empty() => self.message.clone(),
            ErrorKind::Validation => "Please check the highlighted fields.".to_string(),
            ErrorKind::Network => "Unable to reach the server. Check your connection and try again.".to_string(),
            ErrorKind::Timeout => "The server took too long to respond. Please try again.".to_string(),
            ErrorKind::Server | ErrorKind::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Loss of session: the UI should route back to the login screen.
    pub fn should_redirect_to_login(&self) -> bool {
        self.kind == ErrorKind::Auth
    }

    /// Whether the UI should offer a retry button. The request client itself
    /// never retries.
    pub fn offers_retry(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Network | ErrorKind::Timeout | ErrorKind::Server | ErrorKind::Unknown
        )
    }
}

/// Convenience alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Invalid endpoint or client settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API origin must not be empty")]
    EmptyOrigin,

    #[error("invalid API origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("API base path must start with '/': {0:?}")]
    InvalidBasePath(String),

    #[error("unknown platform {0:?} (expected \"web\" or \"mobile\")")]
    UnknownPlatform(String),

    #[error("{name} is invalid: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
