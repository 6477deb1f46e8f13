//! Askama views. Each struct is one page; all of them extend `layout.html`.

use crate::error::FrontendError;

use client_core::navigation::is_admin_route;
use client_core::pages::blog_list::{TOPICS, TopicOption};
use client_core::pages::{
    AdminBlogPage, AdminBlogsPage, BlogListPage, DashboardPage, HomePage, NO_BLOGS_MESSAGE,
    StatsPage,
};

use models::Blog;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use askama::Template;

/// Navigation chrome: public header/footer, or the admin bar on `/admin` routes.
#[derive(Debug, Clone, Default)]
pub struct NavShell {
    pub admin: bool,
    pub search: String,
}

impl NavShell {
    pub fn for_path(path: &str) -> Self {
        Self {
            admin: is_admin_route(path),
            search: String::new(),
        }
    }

    pub fn public() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Topic `<option>` in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicChoice {
    pub value: &'static str,
    pub selected: bool,
}

/// Editor topics: the public filters without `all`.
pub fn topic_choices(selected: &str) -> Vec<TopicChoice> {
    TOPICS
        .iter()
        .skip(1)
        .map(|&value| TopicChoice {
            value,
            selected: value.eq_ignore_ascii_case(selected.trim()),
        })
        .collect()
}

pub fn render<T: Template>(template: &T) -> Result<HttpResponse, FrontendError> {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: Template>(
    status: StatusCode,
    template: &T,
) -> Result<HttpResponse, FrontendError> {
    let body = template.render()?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

// ============================================
// PUBLIC
// ============================================

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub nav: NavShell,
    pub headlines: Vec<Blog>,
    pub blogs: Vec<Blog>,
    pub empty_message: &'static str,
}

impl HomeTemplate {
    pub fn new(nav: NavShell, page: HomePage) -> Self {
        Self {
            nav,
            headlines: page.headlines,
            blogs: page.blogs,
            empty_message: NO_BLOGS_MESSAGE,
        }
    }
}

#[derive(Template)]
#[template(path = "public/blogs.html")]
pub struct BlogsTemplate {
    pub nav: NavShell,
    pub query: String,
    pub show_topics: bool,
    pub topics: Vec<TopicOption>,
    pub blogs: Vec<Blog>,
    pub error: Option<String>,
    pub empty_message: &'static str,
}

impl BlogsTemplate {
    pub fn new(nav: NavShell, page: BlogListPage) -> Self {
        let query = page.query.clone().unwrap_or_default();
        Self {
            nav: nav.with_search(query.clone()),
            show_topics: page.show_topic_filters(),
            topics: page.topic_options(),
            query,
            blogs: page.blogs,
            error: page.error,
            empty_message: NO_BLOGS_MESSAGE,
        }
    }
}

#[derive(Template)]
#[template(path = "public/blog_detail.html")]
pub struct BlogDetailTemplate {
    pub nav: NavShell,
    pub blog: Blog,
    pub related: Vec<Blog>,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate {
    pub nav: NavShell,
    pub message: &'static str,
}

#[derive(Template)]
#[template(path = "public/login.html")]
pub struct LoginTemplate {
    pub nav: NavShell,
    pub email: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub nav: NavShell,
    pub message: String,
}

// ============================================
// ADMIN
// ============================================

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub nav: NavShell,
    pub total_blogs: u64,
    pub total_views: u64,
    pub top_blog: String,
    pub recent_blogs: Vec<Blog>,
}

impl DashboardTemplate {
    pub fn new(nav: NavShell, page: &DashboardPage) -> Self {
        Self {
            nav,
            total_blogs: page.total_blogs(),
            total_views: page.total_views(),
            top_blog: page.top_blog_label(),
            recent_blogs: page.recent_blogs().to_vec(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/stats.html")]
pub struct StatsTemplate {
    pub nav: NavShell,
    pub page: StatsPage,
}

#[derive(Template)]
#[template(path = "admin/blogs.html")]
pub struct AdminBlogsTemplate {
    pub nav: NavShell,
    pub query: String,
    pub blogs: Vec<Blog>,
    pub error: Option<String>,
    pub empty_message: &'static str,
}

impl AdminBlogsTemplate {
    pub fn new(nav: NavShell, page: AdminBlogsPage) -> Self {
        Self {
            nav,
            query: page.query,
            blogs: page.blogs,
            error: page.error,
            empty_message: NO_BLOGS_MESSAGE,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/blog.html")]
pub struct AdminBlogTemplate {
    pub nav: NavShell,
    pub id: String,
    pub blog: Option<Blog>,
    pub editing: bool,
    pub error: Option<String>,
    pub topics: Vec<TopicChoice>,
}

impl AdminBlogTemplate {
    pub fn new(nav: NavShell, page: AdminBlogPage) -> Self {
        let topics = topic_choices(page.blog.as_ref().map_or("", |b| b.topic.as_str()));
        Self {
            nav,
            id: page.id.to_string(),
            blog: page.blog,
            editing: page.editing,
            error: page.error,
            topics,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/create.html")]
pub struct CreateTemplate {
    pub nav: NavShell,
    pub title: String,
    pub content: String,
    pub topics: Vec<TopicChoice>,
    pub error: Option<String>,
}
