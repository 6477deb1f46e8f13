use crate::api_client::BlogApiClient;
use crate::navigation::ADMIN_HOME;

use models::Credentials;

use log::warn;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const MISSING_FIELDS_MESSAGE: &str = "Email and password are required";

/// Result of submitting the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored in the session; continue to `redirect_to`.
    Success { redirect_to: &'static str },
    /// Show the form again with `error` and the submitted email.
    Failed { email: String, error: String },
}

/// Admin login form.
pub struct LoginPage;

impl LoginPage {
    pub async fn submit(api: &BlogApiClient, credentials: Credentials) -> LoginOutcome {
        if !credentials.is_complete() {
            return LoginOutcome::Failed {
                email: credentials.email,
                error: MISSING_FIELDS_MESSAGE.to_string(),
            };
        }

        match api.login(&credentials).await {
            Ok(()) => LoginOutcome::Success {
                redirect_to: ADMIN_HOME,
            },
            Err(e) => {
                warn!("Login error: {e}");
                LoginOutcome::Failed {
                    email: credentials.email,
                    error: e.user_message(LOGIN_FAILED_MESSAGE),
                }
            }
        }
    }
}
