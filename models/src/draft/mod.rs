//! Create/update payload for a blog post.

pub mod builder;

pub use builder::BlogDraftBuilder;

/// Uploaded featured image, sent as the `featured_image` multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct FeaturedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FeaturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturedImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Validated form fields for `POST /blogs` and `PUT /blogs/{id}`.
///
/// Only obtainable through [`BlogDraftBuilder`], so title, topic and content
/// are always non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    topic: String,
    content: String,
    featured_image: Option<FeaturedImage>,
}

impl BlogDraft {
    pub fn builder() -> BlogDraftBuilder {
        BlogDraftBuilder::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn featured_image(&self) -> Option<&FeaturedImage> {
        self.featured_image.as_ref()
    }
}
