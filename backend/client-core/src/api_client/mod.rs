//! Authenticated access to the remote blog API.
//!
//! Every request passes through [`BlogApiClient::prepare_request`], which
//! attaches the session's bearer token, and every response passes through
//! [`BlogApiClient::dispatch`], which handles authorization failures:
//!
//! - the session is cleared
//! - the navigator is sent to the login page, unless it is already there
//! - the error still reaches the caller as [`ApiClientError::Unauthorized`]
//!
//! Nothing is retried.

use crate::config::ApiConfig;
use crate::error::api_client::ApiClientError;
use crate::navigation::{LOGIN_PATH, Navigator, is_login_path};
use crate::session::SessionStore;
use crate::shaping::{
    BLOGS_ENVELOPE_KEY, HEADLINES_ENVELOPE_KEY, blogs_from_value, error_message_from_body,
    unwrap_record,
};

use common::{BearerToken, ErrorLocation, HttpStatusCode};
use models::{Blog, BlogDraft, BlogId, BlogStats, Credentials, LoginResponse};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use url::Url;

const AUTH_SEGMENT: &str = "auth";
const LOGIN_SEGMENT: &str = "login";
const BLOGS_SEGMENT: &str = "blogs";
const SEARCH_SEGMENT: &str = "search";
const TOPIC_SEGMENT: &str = "topic";
const SLUG_SEGMENT: &str = "slug";
const HEADLINES_SEGMENT: &str = "headlines";
const STATS_SEGMENTS: [&str; 3] = [BLOGS_SEGMENT, "stats", "summary"];
const SEARCH_QUERY_KEY: &str = "q";
const BLOG_RECORD_KEY: &str = "blog";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// HTTP client for the blog API, bound to one session and one navigator.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct BlogApiClient {
    base_url: Url,
    client: Client,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl BlogApiClient {
    /// Build a client for `config`.
    ///
    /// # Errors
    /// Returns [`ApiClientError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            session,
            navigator,
        })
    }

    /// Same connection pool and base URL, different session and navigator.
    pub fn with_context(
        &self,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ============================================
    // AUTH
    // ============================================

    /// Exchange credentials for a token and store it in the session.
    ///
    /// # Errors
    /// Returns [`ApiClientError::MissingToken`] if the API accepted the login but sent no token.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiClientError> {
        let url = self.endpoint(&[AUTH_SEGMENT, LOGIN_SEGMENT])?;
        debug!("POST {url}");

        let response = self.dispatch(self.client.post(url).json(credentials)).await?;
        let login: LoginResponse = response.json().await?;

        let token = login
            .token
            .and_then(BearerToken::parse)
            .ok_or_else(ApiClientError::missing_token)?;

        info!("Login succeeded, token received ({} chars)", token.len());
        self.session.store(token);
        Ok(())
    }

    /// Forget the session locally. The API has no logout endpoint.
    pub fn logout(&self) {
        info!("Logging out");
        self.session.clear();
    }

    // ============================================
    // READS
    // ============================================

    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT])?;
        let value = self.get_json(url).await?;
        Ok(blogs_from_value(value, BLOGS_ENVELOPE_KEY)?)
    }

    pub async fn search_blogs(&self, query: &str) -> Result<Vec<Blog>, ApiClientError> {
        let mut url = self.endpoint(&[BLOGS_SEGMENT, SEARCH_SEGMENT])?;
        url.query_pairs_mut().append_pair(SEARCH_QUERY_KEY, query);

        let value = self.get_json(url).await?;
        Ok(blogs_from_value(value, BLOGS_ENVELOPE_KEY)?)
    }

    pub async fn blogs_by_topic(&self, topic: &str) -> Result<Vec<Blog>, ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT, TOPIC_SEGMENT, topic])?;
        let value = self.get_json(url).await?;
        Ok(blogs_from_value(value, BLOGS_ENVELOPE_KEY)?)
    }

    pub async fn blog_by_slug(&self, slug: &str) -> Result<Blog, ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT, SLUG_SEGMENT, slug])?;
        let value = self.get_json(url).await?;
        Ok(serde_json::from_value(unwrap_record(value, BLOG_RECORD_KEY))?)
    }

    pub async fn blog_by_id(&self, id: &BlogId) -> Result<Blog, ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT, id.as_str()])?;
        let value = self.get_json(url).await?;
        Ok(serde_json::from_value(unwrap_record(value, BLOG_RECORD_KEY))?)
    }

    /// Featured posts for the landing page.
    pub async fn headlines(&self) -> Result<Vec<Blog>, ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT, HEADLINES_SEGMENT])?;
        let value = self.get_json(url).await?;
        Ok(blogs_from_value(value, HEADLINES_ENVELOPE_KEY)?)
    }

    pub async fn stats_summary(&self) -> Result<BlogStats, ApiClientError> {
        let url = self.endpoint(&STATS_SEGMENTS)?;
        let value = self.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    // ============================================
    // WRITES
    // ============================================

    /// `POST /blogs` with a multipart body.
    pub async fn create_blog(&self, draft: &BlogDraft) -> Result<(), ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT])?;
        debug!("POST {url}");

        let form = draft_form(draft)?;
        self.dispatch(self.client.post(url).multipart(form)).await?;

        info!("Created blog '{}'", draft.title());
        Ok(())
    }

    /// `PUT /blogs/{id}` with a multipart body.
    pub async fn update_blog(&self, id: &BlogId, draft: &BlogDraft) -> Result<(), ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT, id.as_str()])?;
        debug!("PUT {url}");

        let form = draft_form(draft)?;
        self.dispatch(self.client.put(url).multipart(form)).await?;

        info!("Updated blog {id}");
        Ok(())
    }

    pub async fn delete_blog(&self, id: &BlogId) -> Result<(), ApiClientError> {
        let url = self.endpoint(&[BLOGS_SEGMENT, id.as_str()])?;
        debug!("DELETE {url}");

        self.dispatch(self.client.delete(url)).await?;

        info!("Deleted blog {id}");
        Ok(())
    }

    // ============================================
    // PLUMBING
    // ============================================

    /// `base_url` + percent-encoded `segments`.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiClientError::url_parse(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<Response, ApiClientError> {
        let response = self.prepare_request(request).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let server_message = error_message_from_body(&body);

        if status.is_auth_failure() {
            self.handle_auth_failure(status);
            return Err(ApiClientError::Unauthorized {
                status,
                server_message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        warn!(
            "API request failed: HTTP {} - {}",
            status,
            server_message.as_deref().unwrap_or("no error message")
        );

        Err(ApiClientError::Status {
            status,
            server_message,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn handle_auth_failure(&self, status: HttpStatusCode) {
        warn!("API rejected credentials (HTTP {status}), clearing session");
        self.session.clear();

        let current = self.navigator.current_path();
        if is_login_path(&current) {
            debug!("Already on {LOGIN_PATH}, not redirecting");
        } else {
            self.navigator.navigate(LOGIN_PATH);
        }
    }

    async fn get_json(&self, url: Url) -> Result<Value, ApiClientError> {
        debug!("GET {url}");
        let response = self.dispatch(self.client.get(url)).await?;
        Ok(response.json().await?)
    }
}

fn draft_form(draft: &BlogDraft) -> Result<Form, ApiClientError> {
    let mut form = Form::new()
        .text("title", draft.title().to_string())
        .text("topic", draft.topic().to_string())
        .text("content", draft.content().to_string());

    if let Some(image) = draft.featured_image() {
        let content_type = if image.content_type.trim().is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            image.content_type.as_str()
        };

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(content_type)?;
        form = form.part("featured_image", part);
    }

    Ok(form)
}
