use crate::helpers::{TEST_TOKEN, authorization_headers, harness};

use client_core::session::{SessionChange, SessionStore};

use models::{BlogDraft, BlogId, Credentials, FeaturedImage};

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Bearer attachment
// ============================================================================

/// **VALUE**: Verifies a signed-in session sends `Authorization: Bearer <token>`.
///
/// **WHY THIS MATTERS**: Every admin endpoint rejects requests without the header.
/// If the client stops attaching it, the whole admin area bounces to login.
///
/// **BUG THIS CATCHES**: Would catch `prepare_request` being bypassed for a new call site.
#[tokio::test]
async fn given_signed_in_session_when_requesting_then_bearer_header_attached() {
    // GIVEN: A server that only answers when the header is right
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/stats/summary"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalBlogs": 2,
            "totalViews": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/dashboard");

    // WHEN: Fetching stats
    let stats = h.api.stats_summary().await.unwrap();

    // THEN: The request matched and the stats decoded
    assert_eq!(stats.total_blogs, 2);
    assert_eq!(stats.total_views, 10);
}

/// **VALUE**: Verifies an anonymous session sends no `Authorization` header at all.
///
/// **WHY THIS MATTERS**: `Bearer ` with an empty value is rejected by some proxies and
/// makes public pages fail for logged-out readers.
///
/// **BUG THIS CATCHES**: Would catch the header being sent with a blank token.
#[tokio::test]
async fn given_anonymous_session_when_requesting_then_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs");
    h.api.list_blogs().await.unwrap();

    assert_eq!(authorization_headers(&server).await, vec![None]);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn given_valid_credentials_when_logging_in_then_token_stored_in_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_string_contains("\"email\":\"admin@example.com\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, false, "/login");
    h.api
        .login(&Credentials::new("admin@example.com", "hunter2"))
        .await
        .unwrap();

    assert_eq!(h.session.token().unwrap().as_str(), "jwt-1");
    assert_eq!(h.session.change(), SessionChange::Stored);
}

/// **VALUE**: Verifies a 200 login without a token is treated as a failure.
///
/// **WHY THIS MATTERS**: Storing nothing and redirecting to the dashboard would bounce
/// straight back to login with no explanation.
///
/// **BUG THIS CATCHES**: Would catch `login` returning Ok when `token` is absent or blank.
#[tokio::test]
async fn given_login_response_without_token_when_logging_in_then_missing_token_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "" })))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/login");
    let result = h.api.login(&Credentials::new("a@b.c", "pw")).await;

    assert!(matches!(
        result,
        Err(client_core::error::ApiClientError::MissingToken { .. })
    ));
    assert!(!h.session.is_authenticated());
}

#[tokio::test]
async fn given_signed_in_session_when_logging_out_then_session_cleared() {
    let server = MockServer::start().await;
    let h = harness(&server, true, "/admin/dashboard");

    h.api.logout();

    assert!(!h.session.is_authenticated());
    assert_eq!(h.session.change(), SessionChange::Cleared);
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn given_search_term_when_searching_then_query_parameter_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/search"))
        .and(query_param("q", "rust & tokio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blogs": [{ "_id": "abc", "slug": "rust", "title": "Rust" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs");
    let blogs = h.api.search_blogs("rust & tokio").await.unwrap();

    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].id, BlogId::from("abc"));
}

#[tokio::test]
async fn given_wrapped_record_when_fetching_by_slug_then_blog_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/slug/hello-world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blog": { "id": 9, "slug": "hello-world", "title": "Hello", "views": null }
        })))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs/hello-world");
    let blog = h.api.blog_by_slug("hello-world").await.unwrap();

    assert_eq!(blog.id, BlogId::from(9));
    assert_eq!(blog.views, 0);
}

// ============================================================================
// Writes
// ============================================================================

/// **VALUE**: Verifies create sends a multipart body with every form field.
///
/// **WHY THIS MATTERS**: The API parses `title`, `topic`, `content` and `featured_image`
/// from multipart parts. A JSON body or a renamed part silently drops the image.
///
/// **BUG THIS CATCHES**: Would catch a switch to `.json()` or a typo in a part name.
#[tokio::test]
async fn given_draft_with_image_when_creating_then_multipart_parts_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("name=\"topic\""))
        .and(body_string_contains("name=\"content\""))
        .and(body_string_contains("name=\"featured_image\"; filename=\"cover.png\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = BlogDraft::builder()
        .with_title("Title")
        .with_topic("food")
        .with_content("Body")
        .with_featured_image(FeaturedImage {
            file_name: String::from("cover.png"),
            content_type: String::from("image/png"),
            bytes: b"PNGDATA".to_vec(),
        })
        .build()
        .unwrap();

    let h = harness(&server, true, "/admin/create");
    h.api.create_blog(&draft).await.unwrap();
}

#[tokio::test]
async fn given_draft_when_updating_then_put_to_blog_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/blogs/42"))
        .and(body_string_contains("Updated body"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let draft = BlogDraft::builder()
        .with_title("T")
        .with_topic("cars")
        .with_content("Updated body")
        .build()
        .unwrap();

    let h = harness(&server, true, "/admin/blogs/42");
    h.api.update_blog(&BlogId::from(42), &draft).await.unwrap();
}

#[tokio::test]
async fn given_blog_id_when_deleting_then_delete_request_sent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/blogs/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/blogs");
    h.api.delete_blog(&BlogId::from(7)).await.unwrap();
}

// ============================================================================
// Error bodies
// ============================================================================

/// **VALUE**: Verifies the server's `error` string is surfaced to the caller.
///
/// **WHY THIS MATTERS**: Validation failures ("Slug already exists") are only useful
/// if the admin sees the server's wording instead of a generic message.
///
/// **BUG THIS CATCHES**: Would catch the body being discarded before the error is built.
#[tokio::test]
async fn given_error_body_when_request_fails_then_server_message_available() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Slug already exists" })),
        )
        .mount(&server)
        .await;

    let draft = BlogDraft::builder()
        .with_title("T")
        .with_topic("cars")
        .with_content("C")
        .build()
        .unwrap();

    let h = harness(&server, true, "/admin/create");
    let err = h.api.create_blog(&draft).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.0), Some(400));
    assert_eq!(err.server_message(), Some("Slug already exists"));
    assert_eq!(err.user_message("Failed to create blog"), "Slug already exists");
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn given_non_json_error_body_when_request_fails_then_fallback_message_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs");
    let err = h.api.list_blogs().await.unwrap_err();

    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Error fetching blogs"), "Error fetching blogs");
}
