//! # Session Token Holder
//!
//! Tracks the authenticated identity: the bearer token presented on every
//! request and a snapshot of the logged-in user for display. One session per
//! store; concurrent writers race under last-write-wins.
//!
//! The request client clears the session whenever the server rejects the
//! token it sent (401/403), so screens reading [`SessionStore::user`] after a
//! request must handle the session having disappeared.

use parking_lot::RwLock;
use shared::UserSummary;

/// Point-in-time copy of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserSummary>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any prior session.
    pub fn set_session(&self, token: impl Into<String>, user: UserSummary) {
        let mut session = self.inner.write();
        session.token = Some(token.into());
        session.user = Some(user);
        tracing::debug!(user_id = %session.user.as_ref().map(|u| u.id.as_str()).unwrap_or_default(), "Session started");
    }

    pub fn clear_session(&self) {
        let mut session = self.inner.write();
        if session.token.is_some() || session.user.is_some() {
            tracing::debug!("Session cleared");
        }
        *session = Session::default();
    }

    /// Clear the session only if it still holds `token`. Returns whether it
    /// was cleared. A rejection of an older token leaves a newer login alone.
    pub fn clear_if_token(&self, token: &str) -> bool {
        let mut session = self.inner.write();
        if session.token.as_deref() != Some(token) {
            return false;
        }
        *session = Session::default();
        tracing::debug!("Session cleared after token rejection");
        true
    }

    /// Refresh the user snapshot while keeping the token. Ignored when no
    /// session is live.
    pub fn update_user(&self, user: UserSummary) {
        let mut session = self.inner.write();
        if session.token.is_some() {
            session.user = Some(user);
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.inner.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }
}
