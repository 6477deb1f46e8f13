use crate::helpers::harness;

use client_core::navigation::{ADMIN_BLOGS, ADMIN_HOME, LOGIN_PATH};
use client_core::pages::blog_detail::NOT_FOUND_MESSAGE;
use client_core::pages::blog_editor::CREATE_ERROR_MESSAGE;
use client_core::pages::blog_list::FETCH_ERROR_MESSAGE;
use client_core::pages::stats::STATS_ERROR_MESSAGE;
use client_core::pages::{
    AdminBlogPage, AdminBlogsPage, BlogDetailPage, BlogEditor, BlogListPage, EditorOutcome,
    HomePage, LoginOutcome, LoginPage, StatsPage, TopicFilter,
};

use models::{BlogDraft, BlogId, Credentials};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public pages
// ============================================================================

/// **VALUE**: Verifies the home page survives a failing headlines endpoint.
///
/// **WHY THIS MATTERS**: Headlines are decoration. Their endpoint failing must not blank
/// out the post grid underneath.
///
/// **BUG THIS CATCHES**: Would catch the loader using `?` on either fetch.
#[tokio::test]
async fn given_headlines_failing_when_loading_home_then_blogs_still_shown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/headlines"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "slug": "a", "title": "A", "featured_image": "/uploads/a.png" }
        ])))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/");
    let page = HomePage::load(&h.api).await;

    assert!(page.headlines.is_empty());
    assert_eq!(page.blogs.len(), 1);
    assert_eq!(
        page.blogs[0].featured_image.as_deref(),
        Some(format!("{}/api/uploads/a.png", server.uri()).as_str())
    );
}

#[tokio::test]
async fn given_topic_filter_when_loading_list_then_topic_endpoint_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/topic/food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blogs": [{ "id": 2, "slug": "pasta", "title": "Pasta", "topic": "food" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs");
    let page = BlogListPage::load(&h.api, None, TopicFilter::parse(Some("food"))).await;

    assert_eq!(page.blogs.len(), 1);
    assert!(page.error.is_none());
}

/// **VALUE**: Verifies a search term wins over the topic filter.
///
/// **WHY THIS MATTERS**: The navbar search links to `/blogs?q=...`; if a stale topic
/// parameter came along it must not narrow or replace the search.
///
/// **BUG THIS CATCHES**: Would catch the match arms being reordered.
#[tokio::test]
async fn given_query_and_topic_when_loading_list_then_search_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/search"))
        .and(query_param("q", "pasta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs");
    let page = BlogListPage::load(&h.api, Some(" pasta "), TopicFilter::parse(Some("cars"))).await;

    assert_eq!(page.query.as_deref(), Some("pasta"));
    assert!(page.blogs.is_empty());
    assert!(!page.show_topic_filters());
}

#[tokio::test]
async fn given_api_down_when_loading_list_then_inline_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs");
    let page = BlogListPage::load(&h.api, None, TopicFilter::All).await;

    assert_eq!(page.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn given_slug_when_loading_detail_then_related_exclude_current_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/slug/pasta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "slug": "pasta", "title": "Pasta", "topic": "food"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/topic/food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "slug": "pasta", "title": "Pasta", "topic": "food" },
            { "id": 3, "slug": "pizza", "title": "Pizza", "topic": "food" }
        ])))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs/pasta");
    let page = BlogDetailPage::load(&h.api, "pasta").await;

    assert_eq!(page.blog.unwrap().title, "Pasta");
    assert_eq!(page.related.len(), 1);
    assert_eq!(page.related[0].slug, "pizza");
}

#[tokio::test]
async fn given_unknown_slug_when_loading_detail_then_no_blog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/slug/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": NOT_FOUND_MESSAGE })))
        .mount(&server)
        .await;

    let h = harness(&server, false, "/blogs/missing");
    let page = BlogDetailPage::load(&h.api, "missing").await;

    assert!(page.blog.is_none());
    assert!(page.related.is_empty());
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn given_valid_credentials_when_submitting_login_then_redirect_to_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt" })))
        .mount(&server)
        .await;

    let h = harness(&server, false, LOGIN_PATH);
    let outcome = LoginPage::submit(&h.api, Credentials::new("a@b.c", "pw")).await;

    assert_eq!(outcome, LoginOutcome::Success { redirect_to: ADMIN_HOME });
}

#[tokio::test]
async fn given_blank_password_when_submitting_login_then_rejected_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, false, LOGIN_PATH);
    let outcome = LoginPage::submit(&h.api, Credentials::new("a@b.c", "")).await;

    assert!(matches!(outcome, LoginOutcome::Failed { ref email, .. } if email == "a@b.c"));
}

#[tokio::test]
async fn given_api_unreachable_when_submitting_login_then_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let h = harness(&server, false, LOGIN_PATH);
    let outcome = LoginPage::submit(&h.api, Credentials::new("a@b.c", "pw")).await;

    assert_eq!(
        outcome,
        LoginOutcome::Failed {
            email: String::from("a@b.c"),
            error: String::from("Login failed"),
        }
    );
}

// ============================================================================
// Admin pages
// ============================================================================

#[tokio::test]
async fn given_stats_endpoint_failing_when_loading_stats_then_inline_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/stats/summary"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/stats");
    let page = StatsPage::load(&h.api).await;

    assert_eq!(page.error.as_deref(), Some(STATS_ERROR_MESSAGE));
    assert_eq!(page.total_blogs, 0);
}

#[tokio::test]
async fn given_stats_when_loading_stats_then_top_blogs_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/stats/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalBlogs": 3,
            "totalViews": 90,
            "topBlogs": [{ "id": 1, "title": "Top", "views": 60 }]
        })))
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/stats");
    let page = StatsPage::load(&h.api).await;

    assert!(page.error.is_none());
    assert_eq!(page.total_views, 90);
    assert_eq!(page.top_blogs[0].admin_href(), "/admin/blogs/1");
}

/// **VALUE**: Verifies an expired session on an admin list yields an empty page plus a redirect.
///
/// **WHY THIS MATTERS**: The loader must not crash or show stale rows; the web layer
/// sees the pending navigation and sends the admin to the login form.
///
/// **BUG THIS CATCHES**: Would catch loaders that bypass the shared client and so miss
/// the authorization-failure handling.
#[tokio::test]
async fn given_expired_session_when_loading_admin_list_then_empty_and_redirect_pending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let h = harness(&server, true, ADMIN_BLOGS);
    let page = AdminBlogsPage::load(&h.api, None).await;

    assert!(page.blogs.is_empty());
    assert_eq!(h.navigator.pending().as_deref(), Some(LOGIN_PATH));
}

#[tokio::test]
async fn given_delete_rejected_when_deleting_from_admin_list_then_message_returned() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/blogs/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server, true, ADMIN_BLOGS);
    let result = AdminBlogsPage::delete(&h.api, &BlogId::from(5)).await;

    assert_eq!(result, Err(String::from("Failed to delete blog")));
}

#[tokio::test]
async fn given_missing_blog_when_loading_admin_detail_then_error_and_not_editing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/blogs/99");
    let page = AdminBlogPage::load(&h.api, &BlogId::from(99), true).await;

    assert!(page.blog.is_none());
    assert!(!page.editing);
    assert_eq!(page.error.as_deref(), Some("Failed to load blog"));
}

/// **VALUE**: Verifies form validation runs before anything is sent.
///
/// **WHY THIS MATTERS**: A blank title would be stored by the API as an untitled post
/// with an empty slug that no public route can reach.
///
/// **BUG THIS CATCHES**: Would catch the editor skipping `BlogDraftBuilder::build`.
#[tokio::test]
async fn given_blank_title_when_creating_then_rejected_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/create");
    let form = BlogDraft::builder()
        .with_title("  ")
        .with_topic("food")
        .with_content("C");
    let outcome = BlogEditor::create(&h.api, form).await;

    assert_eq!(
        outcome,
        EditorOutcome::Rejected {
            error: String::from("Title cannot be empty")
        }
    );
}

#[tokio::test]
async fn given_valid_form_when_updating_then_redirect_to_admin_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/blogs/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/blogs/4");
    let form = BlogDraft::builder()
        .with_title("T")
        .with_topic("food")
        .with_content("C");
    let outcome = BlogEditor::update(&h.api, &BlogId::from(4), form).await;

    assert_eq!(outcome, EditorOutcome::Saved { redirect_to: ADMIN_BLOGS });
}

#[tokio::test]
async fn given_server_rejects_create_when_creating_then_server_message_shown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "error": "Topic is invalid" })))
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/create");
    let form = BlogDraft::builder()
        .with_title("T")
        .with_topic("space")
        .with_content("C");
    let outcome = BlogEditor::create(&h.api, form).await;

    assert_eq!(
        outcome,
        EditorOutcome::Rejected {
            error: String::from("Topic is invalid")
        }
    );
}

/// **VALUE**: Verifies a non-2xx create without an `error` field falls back to the
/// create message.
///
/// **WHY THIS MATTERS**: The editor must always explain a failed save, even when the
/// API body carries nothing readable.
///
/// **BUG THIS CATCHES**: Would catch an empty error string or the wrong fallback text.
#[tokio::test]
async fn given_server_rejects_create_without_error_body_when_creating_then_generic_message_shown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "status": "down" })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, true, "/admin/create");
    let form = BlogDraft::builder()
        .with_title("T")
        .with_topic("food")
        .with_content("C");
    let outcome = BlogEditor::create(&h.api, form).await;

    assert_eq!(
        outcome,
        EditorOutcome::Rejected {
            error: String::from(CREATE_ERROR_MESSAGE)
        }
    );
}
