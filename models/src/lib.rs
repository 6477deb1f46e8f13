//! Data shapes exchanged with the remote blog API.
//!
//! The API is owned elsewhere, so every type here deserializes leniently:
//! missing fields default, ids may be numbers or strings, and both
//! snake_case and camelCase timestamp keys are accepted.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: API access, session handling and page loaders
//! - **blog-web**: HTTP server rendering the pages

pub mod auth;
pub mod blog;
pub mod draft;
pub mod error;
pub mod stats;

pub use auth::{Credentials, LoginResponse};
pub use blog::{Blog, BlogId};
pub use draft::{BlogDraft, BlogDraftBuilder, FeaturedImage};
pub use error::model_error::ModelError;
pub use stats::BlogStats;

#[cfg(test)]
mod tests;
