use crate::helpers::{
    TEST_TOKEN, location, multipart_body, multipart_content_type, session_cookie,
    set_session_cookie,
};
use crate::test_app;

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Guard
// ============================================================================

/// **VALUE**: Verifies anonymous visitors are redirected before any admin data is fetched.
///
/// **WHY THIS MATTERS**: The guard must run before the view is built. Fetching first
/// and redirecting after would still hit the API with an anonymous request.
///
/// **BUG THIS CATCHES**: Would catch an admin handler taking `RequestContext` instead
/// of `AdminSession`.
#[actix_web::test]
async fn given_anonymous_visitor_when_opening_admin_pages_then_redirected_without_api_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app!(&server);

    for uri in ["/admin", "/admin/dashboard", "/admin/stats", "/admin/blogs", "/admin/blogs/1", "/admin/create"] {
        let response =
            test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response).as_deref(), Some("/login"), "{uri}");
    }
}

// ============================================================================
// Authorization failure from the API
// ============================================================================

/// **VALUE**: Verifies an expired token on an admin page clears the cookie and redirects.
///
/// **WHY THIS MATTERS**: The cookie still exists, so the guard lets the request through;
/// only the API knows the token is dead. The visitor must end up on the login form with
/// the dead cookie gone.
///
/// **BUG THIS CATCHES**: Would catch the pending navigation or the session clear being
/// lost between the API client and the HTTP response.
#[actix_web::test]
async fn given_expired_token_when_api_rejects_then_cookie_removed_and_redirected_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/stats/summary"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "jwt expired" })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let request = test::TestRequest::get()
        .uri("/admin/stats")
        .cookie(session_cookie())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));
    assert_eq!(set_session_cookie(&response).as_deref(), Some(""));
}

/// **VALUE**: Verifies an update rejected with 401 redirects without reloading the post.
///
/// **WHY THIS MATTERS**: The session is already cleared at that point; reloading the
/// edit page would spend a second request that can only fail.
///
/// **BUG THIS CATCHES**: Would catch the rejected-update path ignoring the pending redirect.
#[actix_web::test]
async fn given_expired_token_when_updating_then_redirected_without_reloading_post() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/blogs/5"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "jwt expired" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .expect(0)
        .mount(&server)
        .await;

    let body = multipart_body(
        &[("title", "T"), ("topic", "food"), ("content", "C")],
        None,
    );

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/admin/blogs/5")
        .cookie(session_cookie())
        .insert_header((CONTENT_TYPE, multipart_content_type()))
        .set_payload(body)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));
    assert_eq!(set_session_cookie(&response).as_deref(), Some(""));
}

// ============================================================================
// Admin list
// ============================================================================

#[actix_web::test]
async fn given_signed_in_admin_when_opening_blog_list_then_bearer_sent_and_rows_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blogs": [{ "id": 1, "title": "A", "views": 5 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let request = test::TestRequest::get()
        .uri("/admin/blogs")
        .cookie(session_cookie())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_session_cookie(&response), None);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert_eq!(body.matches("class=\"blog-row\"").count(), 1);
    assert!(body.contains("<td class=\"views\">5</td>"));
}

#[actix_web::test]
async fn given_delete_fails_when_deleting_then_list_shows_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/blogs/3"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/admin/blogs/3/delete")
        .cookie(session_cookie())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("Failed to delete blog"));
}

#[actix_web::test]
async fn given_delete_succeeds_when_deleting_then_redirected_to_list() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/blogs/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/admin/blogs/3/delete")
        .cookie(session_cookie())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/admin/blogs"));
}

// ============================================================================
// Create
// ============================================================================

/// **VALUE**: Verifies a submitted create form reaches the API as one multipart POST.
///
/// **WHY THIS MATTERS**: The browser's multipart body is parsed here and re-encoded for
/// the API. Any field lost in between means a post saved without it.
///
/// **BUG THIS CATCHES**: Would catch `BlogForm::read` skipping a field or the image part.
#[actix_web::test]
async fn given_complete_form_when_creating_then_multipart_post_sent_and_redirected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("My first post"))
        .and(body_string_contains("name=\"topic\""))
        .and(body_string_contains("food"))
        .and(body_string_contains("name=\"content\""))
        .and(body_string_contains("Hello"))
        .and(body_string_contains("name=\"featured_image\"; filename=\"cover.png\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 10 })))
        .expect(1)
        .mount(&server)
        .await;

    let body = multipart_body(
        &[("title", "My first post"), ("topic", "food"), ("content", "Hello")],
        Some(("cover.png", &b"PNGDATA"[..])),
    );

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/admin/create")
        .cookie(session_cookie())
        .insert_header((CONTENT_TYPE, multipart_content_type()))
        .set_payload(body)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/admin/blogs"));
}

#[actix_web::test]
async fn given_api_rejects_create_when_creating_then_form_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Title already used" })),
        )
        .mount(&server)
        .await;

    let body = multipart_body(
        &[("title", "Dup"), ("topic", "cars"), ("content", "Body")],
        None,
    );

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/admin/create")
        .cookie(session_cookie())
        .insert_header((CONTENT_TYPE, multipart_content_type()))
        .set_payload(body)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("Title already used"));
    assert!(body.contains("value=\"Dup\""));
}

/// **VALUE**: Verifies a failed create with no `error` in the body shows the generic message.
///
/// **WHY THIS MATTERS**: Proxies and crashed backends answer with HTML or empty bodies;
/// the editor still has to say what happened.
///
/// **BUG THIS CATCHES**: Would catch the form rendering a blank error or the raw body.
#[actix_web::test]
async fn given_api_fails_create_without_error_body_when_creating_then_generic_message_shown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>upstream down</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let body = multipart_body(
        &[("title", "Soup"), ("topic", "food"), ("content", "Body")],
        None,
    );

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/admin/create")
        .cookie(session_cookie())
        .insert_header((CONTENT_TYPE, multipart_content_type()))
        .set_payload(body)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("Failed to create blog"));
    assert!(!body.contains("upstream down"));
}

#[actix_web::test]
async fn given_missing_title_when_creating_then_validation_message_without_api_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let body = multipart_body(&[("topic", "cars"), ("content", "Body")], None);

    let app = test_app!(&server);
    let request = test::TestRequest::post()
        .uri("/admin/create")
        .cookie(session_cookie())
        .insert_header((CONTENT_TYPE, multipart_content_type()))
        .set_payload(body)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("Title cannot be empty"));
}
