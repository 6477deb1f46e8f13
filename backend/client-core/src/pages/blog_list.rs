use crate::api_client::BlogApiClient;
use crate::shaping::with_resolved_images;

use models::Blog;

use log::warn;

pub const FETCH_ERROR_MESSAGE: &str = "Error fetching blogs";

/// Topics offered as filter buttons, `all` first.
pub const TOPICS: [&str; 5] = ["all", "cars", "food", "finance", "technology"];

const ALL_TOPICS: &str = "all";

/// Topic restriction for the public list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TopicFilter {
    #[default]
    All,
    Topic(String),
}

impl TopicFilter {
    /// `None`, blank and `all` mean no restriction.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => TopicFilter::All,
            Some(topic) if topic.eq_ignore_ascii_case(ALL_TOPICS) => TopicFilter::All,
            Some(topic) => TopicFilter::Topic(topic.to_lowercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TopicFilter::All => ALL_TOPICS,
            TopicFilter::Topic(topic) => topic,
        }
    }
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
    pub href: String,
}

/// Public list, topic filter and search results in one page.
#[derive(Debug, Clone, Default)]
pub struct BlogListPage {
    pub query: Option<String>,
    pub topic: TopicFilter,
    pub blogs: Vec<Blog>,
    pub error: Option<String>,
}

impl BlogListPage {
    /// A non-blank query searches; otherwise a topic filters; otherwise everything is listed.
    pub async fn load(api: &BlogApiClient, query: Option<&str>, topic: TopicFilter) -> Self {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        let result = match (&query, &topic) {
            (Some(q), _) => api.search_blogs(q).await,
            (None, TopicFilter::Topic(t)) => api.blogs_by_topic(t).await,
            (None, TopicFilter::All) => api.list_blogs().await,
        };

        match result {
            Ok(blogs) => Self {
                query,
                topic,
                blogs: with_resolved_images(api.base_url(), blogs),
                error: None,
            },
            Err(e) => {
                warn!("Failed to fetch blog list: {e}");
                Self {
                    query,
                    topic,
                    blogs: Vec::new(),
                    error: Some(FETCH_ERROR_MESSAGE.to_string()),
                }
            }
        }
    }

    /// Topic buttons are hidden while showing search results.
    pub fn show_topic_filters(&self) -> bool {
        self.query.is_none()
    }

    pub fn topic_options(&self) -> Vec<TopicOption> {
        TOPICS
            .iter()
            .map(|&value| TopicOption {
                value,
                label: capitalize(value),
                selected: self.topic.as_str() == value,
                href: if value == ALL_TOPICS {
                    String::from("/blogs")
                } else {
                    format!("/blogs?topic={value}")
                },
            })
            .collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
