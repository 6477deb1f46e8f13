use crate::api_client::BlogApiClient;
use crate::navigation::ADMIN_BLOGS;

use models::{BlogDraft, BlogDraftBuilder, BlogId, ModelError};

use log::error;

pub const CREATE_ERROR_MESSAGE: &str = "Failed to create blog";
pub const UPDATE_ERROR_MESSAGE: &str = "Failed to update blog";

/// Result of submitting the create or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Saved { redirect_to: &'static str },
    Rejected { error: String },
}

/// Create and update submission for blog posts.
pub struct BlogEditor;

impl BlogEditor {
    pub async fn create(api: &BlogApiClient, form: BlogDraftBuilder) -> EditorOutcome {
        let draft = match validated(form) {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        match api.create_blog(&draft).await {
            Ok(()) => EditorOutcome::Saved {
                redirect_to: ADMIN_BLOGS,
            },
            Err(e) => {
                error!("Create blog error: {e}");
                EditorOutcome::Rejected {
                    error: e.user_message(CREATE_ERROR_MESSAGE),
                }
            }
        }
    }

    pub async fn update(api: &BlogApiClient, id: &BlogId, form: BlogDraftBuilder) -> EditorOutcome {
        let draft = match validated(form) {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        match api.update_blog(id, &draft).await {
            Ok(()) => EditorOutcome::Saved {
                redirect_to: ADMIN_BLOGS,
            },
            Err(e) => {
                error!("Update blog {id} error: {e}");
                EditorOutcome::Rejected {
                    error: e.user_message(UPDATE_ERROR_MESSAGE),
                }
            }
        }
    }
}

fn validated(form: BlogDraftBuilder) -> Result<BlogDraft, EditorOutcome> {
    form.build().map_err(|e| match e {
        ModelError::Validation { message, .. } => EditorOutcome::Rejected { error: message },
    })
}
