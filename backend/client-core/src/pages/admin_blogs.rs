use crate::api_client::BlogApiClient;

use models::{Blog, BlogId};

use log::{error, info};

pub const DELETE_ERROR_MESSAGE: &str = "Failed to delete blog";

/// Admin table of posts with search and delete.
#[derive(Debug, Clone, Default)]
pub struct AdminBlogsPage {
    pub query: String,
    pub blogs: Vec<Blog>,
    pub error: Option<String>,
}

impl AdminBlogsPage {
    /// Fetch failures are logged and leave the table empty.
    pub async fn load(api: &BlogApiClient, query: Option<&str>) -> Self {
        let query = query.map(str::trim).unwrap_or_default().to_string();

        let result = if query.is_empty() {
            api.list_blogs().await
        } else {
            api.search_blogs(&query).await
        };

        let blogs = result.unwrap_or_else(|e| {
            error!("Error fetching blogs: {e}");
            Vec::new()
        });

        Self {
            query,
            blogs,
            error: None,
        }
    }

    /// Delete one post.
    ///
    /// # Errors
    /// Returns the message to show above the table.
    pub async fn delete(api: &BlogApiClient, id: &BlogId) -> Result<(), String> {
        match api.delete_blog(id).await {
            Ok(()) => {
                info!("Blog {id} deleted from admin list");
                Ok(())
            }
            Err(e) => {
                error!("Error deleting blog {id}: {e}");
                Err(e.user_message(DELETE_ERROR_MESSAGE))
            }
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
