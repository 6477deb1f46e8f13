//! Session credential storage.
//!
//! The API client is the only reader and writer of the session. Callers
//! inject a [`SessionStore`] instead of reaching for ambient storage, which
//! keeps every token read and write behind one component.

use common::BearerToken;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

/// Holder of the current bearer token.
pub trait SessionStore: Send + Sync {
    /// Current token, if any.
    fn token(&self) -> Option<BearerToken>;

    /// Replace the stored token.
    fn store(&self, token: BearerToken);

    /// Forget the stored token.
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// What happened to a [`MemorySession`] since it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    Unchanged,
    Stored,
    Cleared,
}

/// In-memory session that remembers its last mutation.
///
/// The web front end seeds one per request from the session cookie and
/// mirrors [`MemorySession::change`] back into a `Set-Cookie` afterwards.
#[derive(Debug)]
pub struct MemorySession {
    state: RwLock<SessionState>,
}

#[derive(Debug)]
struct SessionState {
    token: Option<BearerToken>,
    change: SessionChange,
}

impl MemorySession {
    pub fn new(token: Option<BearerToken>) -> Self {
        Self {
            state: RwLock::new(SessionState {
                token,
                change: SessionChange::Unchanged,
            }),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn change(&self) -> SessionChange {
        self.read().change
    }

    // A panic while holding the lock cannot leave the state half-written,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<BearerToken> {
        self.read().token.clone()
    }

    fn store(&self, token: BearerToken) {
        debug!("Storing session token ({} chars)", token.len());
        let mut state = self.write();
        state.token = Some(token);
        state.change = SessionChange::Stored;
    }

    fn clear(&self) {
        let mut state = self.write();
        if state.token.is_some() {
            debug!("Clearing session token");
        }
        state.token = None;
        state.change = SessionChange::Cleared;
    }
}
