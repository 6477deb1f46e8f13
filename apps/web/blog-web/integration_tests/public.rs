use crate::helpers::{location, set_session_cookie};
use crate::test_app;

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public pages served end to end
// ============================================================================

/// **VALUE**: Verifies the home page renders cards from both API lists.
///
/// **WHY THIS MATTERS**: The landing page is the first thing readers see; it must
/// render headlines and the post grid from a live API response.
///
/// **BUG THIS CATCHES**: Would catch route registration or template wiring mistakes.
#[actix_web::test]
async fn given_api_with_posts_when_opening_home_then_cards_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "headlines": [{ "id": 1, "slug": "big-news", "title": "Big News" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "slug": "second", "title": "Second Post", "content": "one two three" }
        ])))
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("Big News"));
    assert!(body.contains("Second Post"));
    assert!(body.contains("one two three..."));
}

#[actix_web::test]
async fn given_search_query_when_opening_blogs_then_search_endpoint_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/search"))
        .and(query_param("q", "pasta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "blogs": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/blogs?q=pasta").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("No blogs found."));
}

#[actix_web::test]
async fn given_unknown_slug_when_opening_detail_then_404_not_found_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/slug/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/blogs/nope").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("Blog not found"));
}

// ============================================================================
// Login and logout
// ============================================================================

/// **VALUE**: Verifies a successful login stores the token cookie and goes to the dashboard.
///
/// **WHY THIS MATTERS**: This is the only way into the admin area. Without the cookie
/// the next request would be anonymous and bounce straight back.
///
/// **BUG THIS CATCHES**: Would catch the session change not being mirrored into `Set-Cookie`.
#[actix_web::test]
async fn given_valid_credentials_when_posting_login_then_cookie_set_and_redirected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "new-jwt" })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/login")
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("email=admin%40example.com&password=secret")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/admin/dashboard"));
    assert_eq!(set_session_cookie(&response).as_deref(), Some("new-jwt"));
}

/// **VALUE**: Verifies wrong credentials re-render the form with the server's message.
///
/// **WHY THIS MATTERS**: The API answers 401 for bad credentials. Treating that like an
/// expired session would redirect to the same page and lose the message.
///
/// **BUG THIS CATCHES**: Would catch the login page redirecting to itself.
#[actix_web::test]
async fn given_wrong_credentials_when_posting_login_then_form_shows_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/login")
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("email=admin%40example.com&password=wrong")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(location(&response), None);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("Invalid credentials"));
    assert!(body.contains("value=\"admin@example.com\""));
}

#[actix_web::test]
async fn given_signed_in_visitor_when_logging_out_then_cookie_removed_and_redirected() {
    let server = MockServer::start().await;

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/logout")
        .cookie(crate::helpers::session_cookie())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));
    assert_eq!(set_session_cookie(&response).as_deref(), Some(""));
}
