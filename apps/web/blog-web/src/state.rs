use crate::error::FrontendError;

use client_core::BlogApiClient;
use client_core::config::FrontendConfig;
use client_core::navigation::PendingNavigator;
use client_core::session::MemorySession;

use std::sync::Arc;

/// Process-wide state shared by every worker.
///
/// `api` is a template: each request rebinds it to its own session and
/// navigator through [`BlogApiClient::with_context`].
#[derive(Clone)]
pub struct AppState {
    pub api: BlogApiClient,
    pub secure_cookies: bool,
}

impl AppState {
    /// Build the shared client from startup config.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError::Core`] if the HTTP client cannot be built.
    pub fn new(config: &FrontendConfig) -> Result<Self, FrontendError> {
        let api = BlogApiClient::new(
            &config.api,
            Arc::new(MemorySession::anonymous()),
            Arc::new(PendingNavigator::new("/")),
        )?;

        Ok(Self {
            api,
            secure_cookies: config.secure_cookies,
        })
    }
}
