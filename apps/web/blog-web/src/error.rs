use crate::templates::{ErrorTemplate, NavShell};

use client_core::error::CoreError;
use client_core::navigation::LOGIN_PATH;

use common::ErrorLocation;

use std::panic::Location;

use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use log::error;
use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors raised while serving a request or starting the server.
///
/// Page loaders turn API failures into view state themselves, so anything
/// that reaches here is either a guard decision or a fault in this process.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The route needs a session and the visitor has none.
    #[error("Login required")]
    LoginRequired,

    /// Error from this app
    #[error("Frontend Error: {message} {location}")]
    Frontend {
        message: String,
        location: ErrorLocation,
    },

    #[error("Template Error: {message} {location}")]
    Template {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed form submission
    #[error("Form Error: {message} {location}")]
    Form {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FrontendError {
    #[track_caller]
    pub fn frontend(message: impl Into<String>) -> Self {
        FrontendError::Frontend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn form(message: impl Into<String>) -> Self {
        FrontendError::Form {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<askama::Error> for FrontendError {
    #[track_caller]
    fn from(error: askama::Error) -> Self {
        FrontendError::Template {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MultipartError> for FrontendError {
    #[track_caller]
    fn from(error: MultipartError) -> Self {
        FrontendError::Form {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<client_core::error::ConfigError> for FrontendError {
    fn from(error: client_core::error::ConfigError) -> Self {
        FrontendError::Core(CoreError::Config(error))
    }
}

impl From<client_core::error::ApiClientError> for FrontendError {
    fn from(error: client_core::error::ApiClientError) -> Self {
        FrontendError::Core(CoreError::ApiClient(error))
    }
}

impl ResponseError for FrontendError {
    fn status_code(&self) -> StatusCode {
        match self {
            FrontendError::LoginRequired => StatusCode::SEE_OTHER,
            FrontendError::Form { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let FrontendError::LoginRequired = self {
            return HttpResponse::SeeOther()
                .insert_header((LOCATION, LOGIN_PATH))
                .finish();
        }

        error!("Request failed: {self}");

        let page = ErrorTemplate {
            nav: NavShell::public(),
            message: GENERIC_ERROR_MESSAGE.to_string(),
        };

        let body = page
            .render()
            .unwrap_or_else(|_| GENERIC_ERROR_MESSAGE.to_string());

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(body)
    }
}
