mod logger;
mod templates;

use crate::state::AppState;

use client_core::config::{API_URL_ENV, FrontendConfig, LOG_DIR_ENV};

/// State pointing at an address nothing listens on; for tests that never reach the API.
pub(crate) fn offline_state() -> AppState {
    let config = FrontendConfig::from_lookup(|key| match key {
        API_URL_ENV => Some(String::from("http://127.0.0.1:9/api")),
        LOG_DIR_ENV => Some(String::from("/tmp/blog-web-tests")),
        _ => None,
    })
    .unwrap();

    AppState::new(&config).unwrap()
}
