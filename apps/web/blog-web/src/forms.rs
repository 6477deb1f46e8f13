use crate::error::FrontendError;

use models::{BlogDraft, BlogDraftBuilder, Credentials, FeaturedImage};

use actix_multipart::{Field, Multipart};
use futures_util::StreamExt;
use log::debug;
use serde::Deserialize;

/// Largest accepted featured image.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Largest accepted text field.
pub const MAX_TEXT_BYTES: usize = 1024 * 1024;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Credentials::new(form.email.trim(), form.password)
    }
}

#[derive(Deserialize)]
pub struct BlogsQuery {
    pub q: Option<String>,
    pub topic: Option<String>,
}

#[derive(Deserialize)]
pub struct AdminBlogsQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct AdminBlogQuery {
    pub edit: Option<String>,
}

impl AdminBlogQuery {
    /// `?edit`, `?edit=1` and `?edit=true` open the editor.
    pub fn editing(&self) -> bool {
        matches!(self.edit.as_deref().map(str::trim), Some("" | "1" | "true"))
    }
}

/// Create/edit form as submitted, before validation.
#[derive(Debug, Default)]
pub struct BlogForm {
    pub title: String,
    pub topic: String,
    pub content: String,
    pub featured_image: Option<FeaturedImage>,
}

impl BlogForm {
    /// Read the `multipart/form-data` body. Unknown fields are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError::Form`] if the body is malformed, a text field is
    /// not UTF-8, or a part exceeds its size limit.
    pub async fn read(mut payload: Multipart) -> Result<Self, FrontendError> {
        let mut form = Self::default();

        while let Some(field) = payload.next().await {
            let field = field?;
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "title" => form.title = read_text(field).await?,
                "topic" => form.topic = read_text(field).await?,
                "content" => form.content = read_text(field).await?,
                "featured_image" => form.featured_image = read_image(field).await?,
                other => {
                    debug!("Ignoring unexpected form field '{other}'");
                    read_bytes(field, MAX_TEXT_BYTES).await?;
                }
            }
        }

        Ok(form)
    }

    pub fn to_builder(&self) -> BlogDraftBuilder {
        let builder = BlogDraft::builder()
            .with_title(self.title.clone())
            .with_topic(self.topic.clone())
            .with_content(self.content.clone());

        match &self.featured_image {
            Some(image) => builder.with_featured_image(image.clone()),
            None => builder,
        }
    }
}

async fn read_bytes(mut field: Field, limit: usize) -> Result<Vec<u8>, FrontendError> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > limit {
            return Err(FrontendError::form(format!(
                "Field '{}' exceeds {limit} bytes",
                field.name().unwrap_or_default()
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

async fn read_text(field: Field) -> Result<String, FrontendError> {
    let bytes = read_bytes(field, MAX_TEXT_BYTES).await?;
    String::from_utf8(bytes).map_err(|e| FrontendError::form(format!("Invalid UTF-8: {e}")))
}

/// An empty file input submits a part with no bytes; that means "no image".
async fn read_image(field: Field) -> Result<Option<FeaturedImage>, FrontendError> {
    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or("upload")
        .to_string();
    let content_type = field
        .content_type()
        .map(|mime| mime.to_string())
        .unwrap_or_default();

    let bytes = read_bytes(field, MAX_IMAGE_BYTES).await?;
    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(FeaturedImage {
        file_name,
        content_type,
        bytes,
    }))
}
