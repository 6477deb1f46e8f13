use crate::api_client::BlogApiClient;
use crate::shaping::{normalize_image_url, with_resolved_images};

use models::{Blog, BlogId};

use log::{debug, warn};

pub const NOT_FOUND_MESSAGE: &str = "Blog not found";
pub const ADMIN_LOAD_ERROR_MESSAGE: &str = "Failed to load blog";

/// Public post page with related posts from the same topic.
#[derive(Debug, Clone, Default)]
pub struct BlogDetailPage {
    pub blog: Option<Blog>,
    pub related: Vec<Blog>,
}

impl BlogDetailPage {
    pub async fn load(api: &BlogApiClient, slug: &str) -> Self {
        let mut blog = match api.blog_by_slug(slug).await {
            Ok(blog) => blog,
            Err(e) => {
                warn!("Failed to fetch blog '{slug}': {e}");
                return Self::default();
            }
        };
        blog.featured_image = normalize_image_url(api.base_url(), blog.featured_image.as_deref());

        let related = if blog.topic.is_empty() {
            Vec::new()
        } else {
            match api.blogs_by_topic(&blog.topic).await {
                Ok(blogs) => blogs.into_iter().filter(|b| b.slug != blog.slug).collect(),
                Err(e) => {
                    debug!("Related blogs unavailable for topic '{}': {e}", blog.topic);
                    Vec::new()
                }
            }
        };

        Self {
            related: with_resolved_images(api.base_url(), related),
            blog: Some(blog),
        }
    }
}

/// Admin view of one post, optionally in edit mode.
#[derive(Debug, Clone, Default)]
pub struct AdminBlogPage {
    pub id: BlogId,
    pub blog: Option<Blog>,
    pub editing: bool,
    pub error: Option<String>,
}

impl AdminBlogPage {
    pub async fn load(api: &BlogApiClient, id: &BlogId, editing: bool) -> Self {
        match api.blog_by_id(id).await {
            Ok(mut blog) => {
                blog.featured_image =
                    normalize_image_url(api.base_url(), blog.featured_image.as_deref());
                Self {
                    id: id.clone(),
                    blog: Some(blog),
                    editing,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Failed to fetch blog {id}: {e}");
                Self {
                    id: id.clone(),
                    blog: None,
                    editing: false,
                    error: Some(e.user_message(ADMIN_LOAD_ERROR_MESSAGE)),
                }
            }
        }
    }

    /// Keep the fetched post but show an error, e.g. after a rejected update.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
