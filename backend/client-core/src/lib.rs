//! Blog API access, session handling and page loaders for the blog front end.
//!
//! The web shell owns HTTP serving and rendering; everything that talks to
//! the remote API or decides what a page shows lives here.

pub mod api_client;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod shaping;

#[cfg(test)]
mod tests;

pub use api_client::BlogApiClient;
pub use config::{ApiConfig, FrontendConfig};
pub use session::{MemorySession, SessionStore};
