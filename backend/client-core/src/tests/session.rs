use crate::session::{MemorySession, SessionChange, SessionStore};

use common::BearerToken;

fn token(raw: &str) -> BearerToken {
    BearerToken::parse(raw).unwrap()
}

/// **VALUE**: Verifies a seeded session reports its token without recording a change.
///
/// **WHY THIS MATTERS**: The web layer only rewrites the session cookie when the
/// session changed. A seeded session marked as changed would re-issue the cookie
/// on every request.
///
/// **BUG THIS CATCHES**: Would catch `new` initializing `change` to `Stored`.
#[test]
fn given_seeded_session_when_read_then_token_present_and_unchanged() {
    let session = MemorySession::new(Some(token("abc")));

    assert!(session.is_authenticated());
    assert_eq!(session.token().unwrap().as_str(), "abc");
    assert_eq!(session.change(), SessionChange::Unchanged);
}

#[test]
fn given_anonymous_session_when_token_stored_then_change_is_stored() {
    let session = MemorySession::anonymous();
    assert!(!session.is_authenticated());

    session.store(token("fresh"));

    assert!(session.is_authenticated());
    assert_eq!(session.change(), SessionChange::Stored);
}

/// **VALUE**: Verifies clearing removes the token and records the change.
///
/// **WHY THIS MATTERS**: An authorization failure clears the session; the web layer
/// must see `Cleared` so the browser's cookie is removed too, otherwise the next
/// request would resend the rejected token.
///
/// **BUG THIS CATCHES**: Would catch `clear` skipping the change when already empty.
#[test]
fn given_authenticated_session_when_cleared_then_token_gone_and_change_is_cleared() {
    let session = MemorySession::new(Some(token("stale")));

    session.clear();

    assert!(session.token().is_none());
    assert_eq!(session.change(), SessionChange::Cleared);
}

#[test]
fn given_default_session_when_created_then_anonymous() {
    let session = MemorySession::default();
    assert!(session.token().is_none());
    assert_eq!(session.change(), SessionChange::Unchanged);
}
