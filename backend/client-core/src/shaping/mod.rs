//! Normalization of API responses into display-ready values.
//!
//! The API has returned lists both bare and wrapped in an envelope, and image
//! references both absolute and relative; pages only ever see the normalized form.

use models::Blog;

use serde_json::Value;
use url::Url;

pub const BLOGS_ENVELOPE_KEY: &str = "blogs";
pub const HEADLINES_ENVELOPE_KEY: &str = "headlines";

/// Pull the list out of `value`: a bare array, or the array under `key`.
///
/// Any other shape yields an empty list.
pub fn unwrap_list(value: Value, key: &str) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Decode a blog list response.
///
/// # Errors
///
/// Returns the decoding error if an element is not blog-shaped (e.g. a bare string).
pub fn blogs_from_value(value: Value, key: &str) -> Result<Vec<Blog>, serde_json::Error> {
    serde_json::from_value(Value::Array(unwrap_list(value, key)))
}

/// Resolve an image reference against the API base URL.
///
/// Absolute `http(s)` references are kept as-is. Relative ones are joined
/// onto the base with exactly one `/` between them.
pub fn normalize_image_url(base_url: &Url, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;

    if path.starts_with("http") {
        return Some(path.to_string());
    }

    let base = base_url.as_str().trim_end_matches('/');
    Some(format!("{}/{}", base, path.trim_start_matches('/')))
}

/// Apply [`normalize_image_url`] to every blog's featured image.
pub fn with_resolved_images(base_url: &Url, blogs: Vec<Blog>) -> Vec<Blog> {
    blogs
        .into_iter()
        .map(|mut blog| {
            blog.featured_image = normalize_image_url(base_url, blog.featured_image.as_deref());
            blog
        })
        .collect()
}

/// Non-empty `error` string from a JSON error body.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Pull a single record out of `value`, accepting an optional `{ key: {...} }` wrapper.
pub fn unwrap_record(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) if map.get(key).is_some_and(Value::is_object) => {
            map.remove(key).unwrap_or_default()
        }
        other => other,
    }
}
