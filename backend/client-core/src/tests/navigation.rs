use crate::navigation::{
    ADMIN_BLOGS, ADMIN_CREATE, ADMIN_HOME, ADMIN_STATS, LOGIN_PATH, Navigator, PendingNavigator,
    is_admin_route, is_login_path,
};

#[test]
fn given_admin_constants_when_built_then_share_prefix() {
    assert_eq!(ADMIN_HOME, "/admin/dashboard");
    assert_eq!(ADMIN_BLOGS, "/admin/blogs");
    assert_eq!(ADMIN_CREATE, "/admin/create");
    assert_eq!(ADMIN_STATS, "/admin/stats");
}

/// **VALUE**: Verifies only the login page itself counts as "already on login".
///
/// **WHY THIS MATTERS**: A substring check would treat `/blogs/how-to-login` as the login
/// page and suppress the redirect after an authorization failure there.
///
/// **BUG THIS CATCHES**: Would catch a regression to `contains("/login")`.
#[test]
fn given_paths_when_checking_login_then_only_exact_match_counts() {
    assert!(is_login_path("/login"));
    assert!(is_login_path("/login/"));
    assert!(is_login_path("/login?next=/admin"));

    assert!(!is_login_path("/blogs/how-to-login"));
    assert!(!is_login_path("/loginx"));
    assert!(!is_login_path("/admin/login"));
    assert!(!is_login_path("/"));
}

#[test]
fn given_paths_when_checking_admin_route_then_prefix_must_end_at_segment() {
    assert!(is_admin_route("/admin"));
    assert!(is_admin_route("/admin/"));
    assert!(is_admin_route("/admin/blogs/7?edit=1"));

    assert!(!is_admin_route("/administrator"));
    assert!(!is_admin_route("/blogs/admin"));
    assert!(!is_admin_route("/login"));
}

/// **VALUE**: Verifies the pending navigator records the last request and hands it out once.
///
/// **WHY THIS MATTERS**: The web layer turns the pending target into a redirect after
/// the handler finishes. Taking it twice would redirect a later response as well.
///
/// **BUG THIS CATCHES**: Would catch `take_pending` returning a clone instead of taking.
#[test]
fn given_navigation_requested_when_taken_then_returned_once() {
    let navigator = PendingNavigator::new("/admin/stats");
    assert_eq!(navigator.current_path(), "/admin/stats");
    assert!(navigator.pending().is_none());

    navigator.navigate(LOGIN_PATH);

    assert_eq!(navigator.pending().as_deref(), Some(LOGIN_PATH));
    assert_eq!(navigator.take_pending().as_deref(), Some(LOGIN_PATH));
    assert!(navigator.take_pending().is_none());
}
