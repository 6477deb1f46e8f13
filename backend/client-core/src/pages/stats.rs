use crate::api_client::BlogApiClient;

use models::Blog;

use log::warn;

pub const STATS_ERROR_MESSAGE: &str = "Failed to fetch stats";

/// Admin statistics page: totals and most-viewed posts.
#[derive(Debug, Clone, Default)]
pub struct StatsPage {
    pub total_blogs: u64,
    pub total_views: u64,
    pub top_blogs: Vec<Blog>,
    pub error: Option<String>,
}

impl StatsPage {
    pub async fn load(api: &BlogApiClient) -> Self {
        match api.stats_summary().await {
            Ok(stats) => Self {
                total_blogs: stats.total_blogs,
                total_views: stats.total_views,
                top_blogs: stats.top_blogs,
                error: None,
            },
            Err(e) => {
                warn!("Failed to fetch stats: {e}");
                Self {
                    error: Some(STATS_ERROR_MESSAGE.to_string()),
                    ..Self::default()
                }
            }
        }
    }
}
