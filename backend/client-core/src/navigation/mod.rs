//! Route constants and the navigation side channel used by the API client.

use std::sync::Mutex;

use const_format::concatcp;
use log::debug;

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PREFIX: &str = "/admin";
pub const ADMIN_HOME: &str = concatcp!(ADMIN_PREFIX, "/dashboard");
pub const ADMIN_BLOGS: &str = concatcp!(ADMIN_PREFIX, "/blogs");
pub const ADMIN_CREATE: &str = concatcp!(ADMIN_PREFIX, "/create");
pub const ADMIN_STATS: &str = concatcp!(ADMIN_PREFIX, "/stats");

/// Something that knows the current location and can move away from it.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;

    fn navigate(&self, path: &str);
}

/// Whether `path` is the login page itself (a trailing `/` is ignored).
pub fn is_login_path(path: &str) -> bool {
    strip_query(path).trim_end_matches('/') == LOGIN_PATH
}

/// Whether `path` is `/admin` or below it.
pub fn is_admin_route(path: &str) -> bool {
    let path = strip_query(path);
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Navigator that records the requested target instead of acting on it.
///
/// Each request gets its own; the web layer turns a pending target into a
/// `303 See Other` once the handler has finished.
#[derive(Debug)]
pub struct PendingNavigator {
    current_path: String,
    pending: Mutex<Option<String>>,
}

impl PendingNavigator {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            pending: Mutex::new(None),
        }
    }

    /// Most recent navigation request, if any.
    pub fn pending(&self) -> Option<String> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn take_pending(&self) -> Option<String> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl Navigator for PendingNavigator {
    fn current_path(&self) -> String {
        self.current_path.clone()
    }

    fn navigate(&self, path: &str) {
        debug!("Navigation from {} to {} requested", self.current_path, path);
        *self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(path.to_string());
    }
}
