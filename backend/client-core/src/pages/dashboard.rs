use crate::api_client::BlogApiClient;

use models::{Blog, BlogStats};

use log::error;

/// Admin landing page: summary cards and recent posts.
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    pub stats: Option<BlogStats>,
}

impl DashboardPage {
    pub async fn load(api: &BlogApiClient) -> Self {
        match api.stats_summary().await {
            Ok(stats) => Self { stats: Some(stats) },
            Err(e) => {
                error!("Error fetching stats: {e}");
                Self { stats: None }
            }
        }
    }

    pub fn total_blogs(&self) -> u64 {
        self.stats.as_ref().map_or(0, |s| s.total_blogs)
    }

    pub fn total_views(&self) -> u64 {
        self.stats.as_ref().map_or(0, |s| s.total_views)
    }

    pub fn top_blog_label(&self) -> String {
        self.stats
            .as_ref()
            .map_or_else(|| String::from("N/A"), BlogStats::top_blog_label)
    }

    pub fn recent_blogs(&self) -> &[Blog] {
        self.stats.as_ref().map_or(&[], |s| s.recent_blogs.as_slice())
    }
}
