use crate::Blog;

use serde::{Deserialize, Serialize};

/// Aggregate numbers from `GET /blogs/stats/summary`.
///
/// The dashboard reads `topBlog`/`recentBlogs` while the stats page reads
/// `topBlogs`; all of them are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogStats {
    pub total_blogs: u64,
    pub total_views: u64,
    pub top_blog: Option<Blog>,
    pub top_blogs: Vec<Blog>,
    pub recent_blogs: Vec<Blog>,
}

impl BlogStats {
    /// `"{title} ({views} views)"`, or `N/A` when the API reported no top blog.
    pub fn top_blog_label(&self) -> String {
        match &self.top_blog {
            Some(blog) => format!("{} ({} views)", blog.title, blog.views),
            None => String::from("N/A"),
        }
    }
}
