use crate::guard::{Access, Capability, authorize, required_capability};
use crate::navigation::LOGIN_PATH;
use crate::session::MemorySession;

use common::BearerToken;

/// **VALUE**: Verifies every admin route requires an authenticated session.
///
/// **WHY THIS MATTERS**: Admin pages fetch and mutate content. Rendering even their
/// shell for an anonymous visitor leaks the admin surface.
///
/// **BUG THIS CATCHES**: Would catch a new admin route falling outside the prefix check.
#[test]
fn given_anonymous_visitor_when_opening_admin_route_then_redirected_to_login() {
    for path in ["/admin/dashboard", "/admin/blogs", "/admin/blogs/3", "/admin/create", "/admin/stats"] {
        assert_eq!(
            authorize(path, Capability::Anonymous),
            Access::Redirect(LOGIN_PATH),
            "{path} should require a session"
        );
    }
}

#[test]
fn given_authenticated_visitor_when_opening_admin_route_then_granted() {
    assert_eq!(authorize("/admin/stats", Capability::Authenticated), Access::Granted);
}

#[test]
fn given_any_visitor_when_opening_public_route_then_granted() {
    for path in ["/", "/blogs", "/blogs/some-slug", "/login"] {
        assert_eq!(required_capability(path), Capability::Anonymous);
        assert_eq!(authorize(path, Capability::Anonymous), Access::Granted);
        assert_eq!(authorize(path, Capability::Authenticated), Access::Granted);
    }
}

#[test]
fn given_session_when_deriving_capability_then_follows_token_presence() {
    let anonymous = MemorySession::anonymous();
    assert_eq!(Capability::of(&anonymous), Capability::Anonymous);

    let signed_in = MemorySession::new(BearerToken::parse("jwt"));
    assert_eq!(Capability::of(&signed_in), Capability::Authenticated);
}
