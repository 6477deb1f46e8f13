use crate::HttpStatusCode;

/// **VALUE**: Verifies that exactly 401 and 403 count as authorization failures.
///
/// **WHY THIS MATTERS**: Authorization failures clear the session and force a redirect to
/// the login page. Misclassifying a 404 or 500 would log users out for no reason.
///
/// **BUG THIS CATCHES**: Would catch a range check replacing the explicit 401/403 match.
#[test]
fn given_status_codes_when_classifying_auth_failure_then_only_401_and_403_match() {
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());

    for code in [200, 201, 400, 402, 404, 422, 500, 503] {
        assert!(
            !HttpStatusCode(code).is_auth_failure(),
            "{code} should not be an auth failure"
        );
    }
}

/// **VALUE**: Verifies success/client/server ranges.
///
/// **WHY THIS MATTERS**: The API client decides between `Ok` and `ApiClientError::Status`
/// on `is_success()`.
///
/// **BUG THIS CATCHES**: Would catch off-by-one range bounds (e.g. treating 300 as success).
#[test]
fn given_boundary_codes_when_classifying_then_ranges_are_half_open() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(199).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

#[test]
fn given_u16_when_converted_then_displays_numeric_code() {
    let status = HttpStatusCode::from(404);
    assert_eq!(status.to_string(), "404");
}
