use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Invalid URL Error: {key}={value}: {reason} {location}")]
    InvalidUrl {
        location: ErrorLocation,
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Config Parse Error: {key}={value}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Config Directory Not Found Error: {reason} {location}")]
    DirectoryNotFound {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}
