use crate::api_client::BlogApiClient;
use crate::shaping::with_resolved_images;

use models::Blog;

use log::warn;

/// Landing page: featured headlines above the full post grid.
#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub headlines: Vec<Blog>,
    pub blogs: Vec<Blog>,
}

impl HomePage {
    /// Fetch headlines and posts concurrently. Either list falls back to empty on failure.
    pub async fn load(api: &BlogApiClient) -> Self {
        let (headlines, blogs) = tokio::join!(api.headlines(), api.list_blogs());

        let headlines = headlines.unwrap_or_else(|e| {
            warn!("Failed to fetch headlines: {e}");
            Vec::new()
        });

        let blogs = blogs.unwrap_or_else(|e| {
            warn!("Failed to fetch blogs: {e}");
            Vec::new()
        });

        Self {
            headlines: with_resolved_images(api.base_url(), headlines),
            blogs: with_resolved_images(api.base_url(), blogs),
        }
    }
}
