// Unit tests for response shaping
// Envelope unwrapping, image URL resolution and error body extraction

use crate::shaping::{
    BLOGS_ENVELOPE_KEY, blogs_from_value, error_message_from_body, normalize_image_url,
    unwrap_list, unwrap_record, with_resolved_images,
};

use models::Blog;

use serde_json::json;
use url::Url;

fn base() -> Url {
    Url::parse("https://api.example.com/api/").unwrap()
}

// ============================================
// LIST ENVELOPES
// ============================================

/// **VALUE**: Verifies bare arrays and `{ blogs: [...] }` envelopes decode the same.
///
/// **WHY THIS MATTERS**: The API has returned both shapes over time. Pages must not
/// care which one they got.
///
/// **BUG THIS CATCHES**: Would catch `unwrap_list` only handling one of the shapes.
#[test]
fn given_bare_and_wrapped_lists_when_decoded_then_yield_same_blogs() {
    let bare = json!([{ "id": 1, "slug": "a", "title": "A" }]);
    let wrapped = json!({ "blogs": [{ "id": 1, "slug": "a", "title": "A" }] });

    let from_bare = blogs_from_value(bare, BLOGS_ENVELOPE_KEY).unwrap();
    let from_wrapped = blogs_from_value(wrapped, BLOGS_ENVELOPE_KEY).unwrap();

    assert_eq!(from_bare, from_wrapped);
    assert_eq!(from_bare[0].title, "A");
}

#[test]
fn given_unexpected_shape_when_unwrapping_list_then_returns_empty() {
    assert!(unwrap_list(json!({ "message": "ok" }), BLOGS_ENVELOPE_KEY).is_empty());
    assert!(unwrap_list(json!({ "blogs": "nope" }), BLOGS_ENVELOPE_KEY).is_empty());
    assert!(unwrap_list(json!(null), BLOGS_ENVELOPE_KEY).is_empty());
    assert!(unwrap_list(json!(42), BLOGS_ENVELOPE_KEY).is_empty());
}

#[test]
fn given_wrapped_record_when_unwrapped_then_inner_object_returned() {
    let inner = unwrap_record(json!({ "blog": { "title": "T" } }), "blog");
    assert_eq!(inner, json!({ "title": "T" }));

    let bare = unwrap_record(json!({ "title": "T", "blog": "x" }), "blog");
    assert_eq!(bare["title"], "T");
}

// ============================================
// IMAGE URLS
// ============================================

/// **VALUE**: Verifies relative image paths are joined onto the API base with one `/`.
///
/// **WHY THIS MATTERS**: Uploaded images are served relative to the API host. A doubled
/// or missing slash produces a broken image on every card.
///
/// **BUG THIS CATCHES**: Would catch a plain `format!("{base}{path}")` join.
#[test]
fn given_relative_paths_when_normalized_then_joined_with_single_slash() {
    assert_eq!(
        normalize_image_url(&base(), Some("/uploads/a.png")).as_deref(),
        Some("https://api.example.com/api/uploads/a.png")
    );
    assert_eq!(
        normalize_image_url(&base(), Some("uploads/a.png")).as_deref(),
        Some("https://api.example.com/api/uploads/a.png")
    );
}

#[test]
fn given_absolute_or_missing_image_when_normalized_then_kept_or_none() {
    assert_eq!(
        normalize_image_url(&base(), Some("https://cdn.example.com/x.jpg")).as_deref(),
        Some("https://cdn.example.com/x.jpg")
    );
    assert_eq!(normalize_image_url(&base(), None), None);
    assert_eq!(normalize_image_url(&base(), Some("   ")), None);
}

#[test]
fn given_blogs_when_resolving_images_then_every_image_normalized() {
    let blogs = vec![
        Blog {
            featured_image: Some(String::from("img/1.png")),
            ..Blog::default()
        },
        Blog::default(),
    ];

    let resolved = with_resolved_images(&base(), blogs);

    assert_eq!(
        resolved[0].featured_image.as_deref(),
        Some("https://api.example.com/api/img/1.png")
    );
    assert_eq!(resolved[1].featured_image, None);
}

// ============================================
// ERROR BODIES
// ============================================

#[test]
fn given_error_bodies_when_extracting_message_then_only_non_empty_strings_returned() {
    assert_eq!(
        error_message_from_body(r#"{"error":"Invalid credentials"}"#).as_deref(),
        Some("Invalid credentials")
    );
    assert_eq!(error_message_from_body(r#"{"error":"  "}"#), None);
    assert_eq!(error_message_from_body(r#"{"error":42}"#), None);
    assert_eq!(error_message_from_body("<html>Bad Gateway</html>"), None);
    assert_eq!(error_message_from_body(""), None);
}
