//! Shared building blocks for the blog front end.
//!
//! Everything here is free of I/O so every other crate can depend on it:
//!
//! - **ErrorLocation**: file/line/column captured at the error site
//! - **HttpStatusCode**: status classification used by the API client
//! - **BearerToken**: session credential that never leaks into logs

pub mod bearer_token;
pub mod error;
pub mod http_status;

pub use bearer_token::BearerToken;
pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
