//! Test helpers for API client integration tests.
//!
//! Every test gets its own wiremock server, session and navigator so the
//! recorded requests and redirects belong to that test alone.

use client_core::config::ApiConfig;
use client_core::navigation::PendingNavigator;
use client_core::session::MemorySession;
use client_core::BlogApiClient;

use common::BearerToken;

use std::sync::Arc;

use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-12345";

/// Client plus the session and navigator it was built with.
pub struct Harness {
    pub api: BlogApiClient,
    pub session: Arc<MemorySession>,
    pub navigator: Arc<PendingNavigator>,
}

/// Client for `server`'s `/api` prefix, optionally signed in, currently at `current_path`.
pub fn harness(server: &MockServer, signed_in: bool, current_path: &str) -> Harness {
    let config = ApiConfig::new(&format!("{}/api", server.uri())).expect("valid mock URL");

    let token = if signed_in {
        BearerToken::parse(TEST_TOKEN)
    } else {
        None
    };
    let session = Arc::new(MemorySession::new(token));
    let navigator = Arc::new(PendingNavigator::new(current_path));

    let api = BlogApiClient::new(&config, session.clone(), navigator.clone())
        .expect("client builds");

    Harness {
        api,
        session,
        navigator,
    }
}

/// `Authorization` header of every request the server received, in order.
pub async fn authorization_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            request
                .headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}
