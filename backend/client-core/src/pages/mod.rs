//! Page loaders.
//!
//! Each loader issues its reads through a scoped [`BlogApiClient`] and
//! returns plain view state. Failures are turned into an inline message or a
//! logged warning here; an authorization failure has additionally queued a
//! login redirect on the client's navigator, which the web layer applies.
//!
//! [`BlogApiClient`]: crate::api_client::BlogApiClient

pub mod admin_blogs;
pub mod blog_detail;
pub mod blog_editor;
pub mod blog_list;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod stats;

pub use admin_blogs::AdminBlogsPage;
pub use blog_detail::{AdminBlogPage, BlogDetailPage};
pub use blog_editor::{BlogEditor, EditorOutcome};
pub use blog_list::{BlogListPage, TopicFilter};
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::{LoginOutcome, LoginPage};
pub use stats::StatsPage;

/// Empty-state text shared by the public and admin lists.
pub const NO_BLOGS_MESSAGE: &str = "No blogs found.";
