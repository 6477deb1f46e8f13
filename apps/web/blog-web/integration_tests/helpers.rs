//! Test helpers for blog-web integration tests.
//!
//! The full route table runs in-process via `actix_web::test`, talking to a
//! wiremock stand-in for the remote blog API.

use blog_web::context::SESSION_COOKIE;
use blog_web::state::AppState;

use client_core::config::{API_URL_ENV, FrontendConfig, LOG_DIR_ENV};

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "integration-jwt";
pub const BOUNDARY: &str = "----blogwebboundary";

pub fn state_for(server: &MockServer) -> AppState {
    let api_url = format!("{}/api", server.uri());
    let config = FrontendConfig::from_lookup(|key| match key {
        API_URL_ENV => Some(api_url.clone()),
        LOG_DIR_ENV => Some(String::from("/tmp/blog-web-integration")),
        _ => None,
    })
    .expect("test config");

    AppState::new(&config).expect("test state")
}

/// Initialize the full route table against `server`.
#[macro_export]
macro_rules! test_app {
    ($server:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($crate::helpers::state_for($server)))
                .configure(blog_web::routes::configure),
        )
        .await
    };
}

pub fn session_cookie() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, TEST_TOKEN)
}

pub fn location<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Value of the `blog_token` cookie set by `response`, if any (empty for a removal).
pub fn set_session_cookie<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// `multipart/form-data` body with text `fields` and an optional image part.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"featured_image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
