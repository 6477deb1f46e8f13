//! Route gating by capability.
//!
//! Evaluated before a protected view is built, never from inside one.

use crate::navigation::{LOGIN_PATH, is_admin_route};
use crate::session::SessionStore;

/// What the current visitor is able to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Authenticated,
    Anonymous,
}

impl Capability {
    pub fn of(session: &dyn SessionStore) -> Self {
        if session.is_authenticated() {
            Capability::Authenticated
        } else {
            Capability::Anonymous
        }
    }

    fn satisfies(self, required: Capability) -> bool {
        match required {
            Capability::Anonymous => true,
            Capability::Authenticated => self == Capability::Authenticated,
        }
    }
}

/// Outcome of [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(&'static str),
}

/// Capability needed to view `path`.
pub fn required_capability(path: &str) -> Capability {
    if is_admin_route(path) {
        Capability::Authenticated
    } else {
        Capability::Anonymous
    }
}

/// Decide whether a visitor with `capability` may view `path`.
pub fn authorize(path: &str, capability: Capability) -> Access {
    if capability.satisfies(required_capability(path)) {
        Access::Granted
    } else {
        Access::Redirect(LOGIN_PATH)
    }
}
