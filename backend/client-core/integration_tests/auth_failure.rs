use crate::helpers::{TEST_TOKEN, harness};

use client_core::navigation::LOGIN_PATH;
use client_core::session::{SessionChange, SessionStore};

use models::Credentials;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Authorization failures: clear session, redirect unless on login, still fail
// ============================================================================

/// **VALUE**: Verifies a 401 clears the session, queues a login redirect and still errors.
///
/// **WHY THIS MATTERS**: An expired token must not be resent, the admin must land on
/// the login form, and the page that made the call must still see that it failed so
/// it does not render stale data as if the call succeeded.
///
/// **BUG THIS CATCHES**: Would catch the handler swallowing the error after redirecting,
/// or redirecting without clearing the token.
#[tokio::test]
async fn given_expired_token_when_api_returns_401_then_session_cleared_and_redirected() {
    // GIVEN: A signed-in admin on the stats page
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/stats/summary"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "jwt expired" })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/stats");

    // WHEN: The API rejects the token
    let err = h.api.stats_summary().await.unwrap_err();

    // THEN: The error still reaches the caller
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("jwt expired"));

    // AND: The session is cleared
    assert!(h.session.token().is_none());
    assert_eq!(h.session.change(), SessionChange::Cleared);

    // AND: A login redirect is pending
    assert_eq!(h.navigator.pending().as_deref(), Some(LOGIN_PATH));
}

#[tokio::test]
async fn given_signed_in_session_when_api_returns_403_then_handled_like_401() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/blogs/3"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/blogs");
    let err = h
        .api
        .delete_blog(&models::BlogId::from(3))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.status().map(|s| s.0), Some(403));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.navigator.pending().as_deref(), Some(LOGIN_PATH));
}

/// **VALUE**: Verifies a failed login on the login page does not redirect to itself.
///
/// **WHY THIS MATTERS**: Wrong credentials come back as 401. Redirecting would reload the
/// form and throw away the "Invalid credentials" message the admin needs to see.
///
/// **BUG THIS CATCHES**: Would catch the "already on login" check being dropped.
#[tokio::test]
async fn given_login_page_when_credentials_rejected_then_no_redirect_and_error_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let h = harness(&server, false, "/login");
    let err = h
        .api
        .login(&Credentials::new("admin@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert!(h.navigator.pending().is_none());
}

#[tokio::test]
async fn given_public_page_when_api_returns_500_then_session_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server, true, "/blogs");
    let err = h.api.list_blogs().await.unwrap_err();

    assert!(!err.is_unauthorized());
    assert_eq!(h.session.token().unwrap().as_str(), TEST_TOKEN);
    assert_eq!(h.session.change(), SessionChange::Unchanged);
    assert!(h.navigator.pending().is_none());
}
