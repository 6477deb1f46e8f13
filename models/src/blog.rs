use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Author shown when the API does not name one.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Number of words kept by [`Blog::excerpt`].
pub const EXCERPT_WORDS: usize = 25;

/// Database identifier of a blog post.
///
/// The API has served both numeric ids and string object ids; both are kept
/// as their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlogId(String);

impl BlogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlogId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for BlogId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for BlogId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => BlogId(n.to_string()),
            RawId::Text(s) => BlogId(s),
        })
    }
}

/// A blog post as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlog")]
pub struct Blog {
    pub id: BlogId,
    pub slug: String,
    pub title: String,
    pub topic: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub views: u64,
    pub created_at: Option<String>,
    pub author: Option<String>,
}

/// Wire shape accepting every key spelling the API has used.
#[derive(Deserialize)]
struct RawBlog {
    #[serde(default)]
    id: Option<BlogId>,
    #[serde(default, rename = "_id")]
    object_id: Option<BlogId>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    featured_image: Option<String>,
    #[serde(default)]
    views: Option<u64>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default, rename = "createdAt")]
    created_at_camel: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

impl From<RawBlog> for Blog {
    fn from(raw: RawBlog) -> Self {
        Blog {
            id: raw.id.or(raw.object_id).unwrap_or_default(),
            slug: raw.slug.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            topic: raw.topic.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            featured_image: raw.featured_image.filter(|s| !s.trim().is_empty()),
            views: raw.views.unwrap_or(0),
            created_at: raw.created_at.or(raw.created_at_camel),
            author: raw.author.filter(|s| !s.trim().is_empty()),
        }
    }
}

impl Blog {
    /// Public detail route, `/blogs/{slug}` with the slug percent-encoded.
    pub fn public_href(&self) -> String {
        route_path(&["blogs"], &self.slug)
    }

    /// Admin detail route, `/admin/blogs/{id}`.
    pub fn admin_href(&self) -> String {
        route_path(&["admin", "blogs"], self.id.as_str())
    }

    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }

    /// Calendar date (`YYYY-MM-DD`) of the creation timestamp.
    ///
    /// Empty when the API sent no timestamp or one that is not RFC 3339.
    pub fn display_date(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(display_date)
            .unwrap_or_default()
    }

    /// First [`EXCERPT_WORDS`] words of the content followed by `...`.
    pub fn excerpt(&self) -> String {
        let words: Vec<&str> = self.content.split_whitespace().take(EXCERPT_WORDS).collect();
        format!("{}...", words.join(" "))
    }
}

/// Normalize a timestamp to its calendar date.
///
/// UTC RFC 3339 values are parsed; anything else that starts with a
/// `YYYY-MM-DD` prefix (e.g. a `+02:00` offset) keeps that prefix.
pub fn display_date(timestamp: &str) -> Option<String> {
    let timestamp = timestamp.trim();
    if let Ok(parsed) = humantime::parse_rfc3339_weak(timestamp) {
        let formatted = humantime::format_rfc3339_seconds(parsed).to_string();
        return formatted.get(..10).map(str::to_string);
    }

    let prefix = timestamp.get(..10)?;
    let looks_like_date = prefix.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '-',
        _ => c.is_ascii_digit(),
    });
    looks_like_date.then(|| prefix.to_string())
}

const ROUTE_BASE: &str = "http://localhost/";

/// Path of `prefix` followed by `segment`, encoded as a single path segment
/// (space becomes `%20`, `/` becomes `%2F`).
fn route_path(prefix: &[&str], segment: &str) -> String {
    let fallback = || format!("/{}/{}", prefix.join("/"), segment);
    let Ok(mut url) = Url::parse(ROUTE_BASE) else {
        return fallback();
    };
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.clear().extend(prefix).push(segment);
        }
        Err(()) => return fallback(),
    }
    url.path().to_string()
}
