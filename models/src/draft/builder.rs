use crate::ModelError;
use crate::draft::{BlogDraft, FeaturedImage};

use common::ErrorLocation;

use std::panic::Location;

/// Builder for creating validated [`BlogDraft`] instances from form input.
#[derive(Debug, Default)]
pub struct BlogDraftBuilder {
    title: Option<String>,
    topic: Option<String>,
    content: Option<String>,
    featured_image: Option<FeaturedImage>,
}

impl BlogDraftBuilder {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach an image. Uploads with no bytes (an empty file input) are ignored.
    pub fn with_featured_image(mut self, image: FeaturedImage) -> Self {
        if !image.bytes.is_empty() {
            self.featured_image = Some(image);
        }
        self
    }

    /// Build the draft, rejecting missing or blank required fields.
    #[track_caller]
    pub fn build(self) -> Result<BlogDraft, ModelError> {
        let title = required(self.title, "Title")?;
        let topic = required(self.topic, "Topic")?;
        let content = required(self.content, "Content")?;

        Ok(BlogDraft {
            title,
            topic,
            content,
            featured_image: self.featured_image,
        })
    }
}

#[track_caller]
fn required(value: Option<String>, field: &str) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::Validation {
        message: format!("{field} is required"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation {
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(trimmed.to_string())
}
