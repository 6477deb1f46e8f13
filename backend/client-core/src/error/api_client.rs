use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures surfaced by [`crate::api_client::BlogApiClient`].
///
/// `Unauthorized` is kept apart from `Status` because the client has already
/// cleared the session and requested the login redirect by the time a caller sees it.
#[derive(Debug, ThisError)]
pub enum ApiClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Unauthorized: HTTP {status} {location}")]
    Unauthorized {
        status: HttpStatusCode,
        server_message: Option<String>,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {} {location}", .server_message.as_deref().unwrap_or("no error message"))]
    Status {
        status: HttpStatusCode,
        server_message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Login response did not include a token {location}")]
    MissingToken { location: ErrorLocation },
}

impl ApiClientError {
    #[track_caller]
    pub fn missing_token() -> Self {
        ApiClientError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url_parse(message: impl Into<String>) -> Self {
        ApiClientError::UrlParse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of the failed response, if the request got that far.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ApiClientError::Unauthorized { status, .. } | ApiClientError::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiClientError::Unauthorized { .. })
    }

    /// The `error` string from the response body, when the API sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiClientError::Unauthorized { server_message, .. }
            | ApiClientError::Status { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's `error` message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
