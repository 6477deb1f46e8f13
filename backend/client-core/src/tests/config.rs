// Unit tests for config resolution
// Lookups are fed from a map so the process environment is never touched

use crate::config::{
    API_TIMEOUT_ENV, API_URL_ENV, ApiConfig, BIND_ADDRESS_ENV, DEFAULT_API_URL,
    DEFAULT_BIND_ADDRESS, DEFAULT_TIMEOUT, FrontendConfig, LOG_DIR_ENV, LOG_LEVEL_ENV,
    SECURE_COOKIES_ENV,
};
use crate::error::ConfigError;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// **VALUE**: Verifies a start with no environment talks to the hosted API.
///
/// **WHY THIS MATTERS**: The front end is deployed without any configuration in most
/// setups. Every key must have a usable default.
///
/// **BUG THIS CATCHES**: Would catch a default being removed and `from_lookup` failing
/// on an unset key.
#[test]
fn given_empty_environment_when_resolving_config_then_uses_defaults() {
    // GIVEN: Only a log dir (the data dir may not exist in CI)
    let config = FrontendConfig::from_lookup(lookup(&[(LOG_DIR_ENV, "/tmp/blog-web-logs")]))
        .unwrap();

    // THEN: Defaults are applied
    assert_eq!(config.api.base_url.as_str(), format!("{DEFAULT_API_URL}/"));
    assert_eq!(config.api.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    assert_eq!(config.log_dir, PathBuf::from("/tmp/blog-web-logs"));
    assert!(!config.secure_cookies);
}

#[test]
fn given_all_keys_set_when_resolving_config_then_values_are_used() {
    let config = FrontendConfig::from_lookup(lookup(&[
        (API_URL_ENV, "http://localhost:5000/api"),
        (API_TIMEOUT_ENV, "5"),
        (BIND_ADDRESS_ENV, "0.0.0.0:9000"),
        (LOG_DIR_ENV, "/var/log/blog"),
        (LOG_LEVEL_ENV, "warn"),
        (SECURE_COOKIES_ENV, "TRUE"),
    ]))
    .unwrap();

    assert_eq!(config.api.base_url.as_str(), "http://localhost:5000/api/");
    assert_eq!(config.api.timeout, Duration::from_secs(5));
    assert_eq!(config.bind_address, "0.0.0.0:9000");
    assert_eq!(config.log_level, LevelFilter::Warn);
    assert!(config.secure_cookies);
}

/// **VALUE**: Verifies the base URL always ends in `/`.
///
/// **WHY THIS MATTERS**: Endpoints are appended as path segments. Without the trailing
/// slash a base of `/api` would lose its prefix and requests would hit `/blogs`.
///
/// **BUG THIS CATCHES**: Would catch removal of the normalization in `parse_base_url`.
#[test]
fn given_base_url_without_trailing_slash_when_parsed_then_slash_is_added() {
    let config = ApiConfig::new("https://example.com/api").unwrap();
    assert_eq!(config.base_url.path(), "/api/");

    let already = ApiConfig::new("https://example.com/api/").unwrap();
    assert_eq!(already.base_url.path(), "/api/");
}

#[test]
fn given_non_http_scheme_when_parsed_then_returns_invalid_url() {
    let result = ApiConfig::new("ftp://example.com/api");
    assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
}

#[test]
fn given_garbage_url_when_resolving_config_then_returns_invalid_url() {
    let result = FrontendConfig::from_lookup(lookup(&[
        (API_URL_ENV, "not a url"),
        (LOG_DIR_ENV, "/tmp"),
    ]));
    assert!(matches!(result, Err(ConfigError::InvalidUrl { key, .. }) if key == API_URL_ENV));
}

#[test]
fn given_non_numeric_timeout_when_resolving_config_then_returns_parse_error() {
    let result = FrontendConfig::from_lookup(lookup(&[
        (API_TIMEOUT_ENV, "soon"),
        (LOG_DIR_ENV, "/tmp"),
    ]));
    assert!(matches!(result, Err(ConfigError::ParseError { key, .. }) if key == API_TIMEOUT_ENV));
}

/// **VALUE**: Verifies a zero timeout is rejected at startup.
///
/// **WHY THIS MATTERS**: reqwest treats a zero timeout as "fail immediately", so every
/// page would render its fallback without ever reaching the API.
///
/// **BUG THIS CATCHES**: Would catch `validate` no longer checking the timeout.
#[test]
fn given_zero_timeout_when_resolving_config_then_returns_validation_error() {
    let result = FrontendConfig::from_lookup(lookup(&[
        (API_TIMEOUT_ENV, "0"),
        (LOG_DIR_ENV, "/tmp"),
    ]));
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_whitespace_values_when_resolving_config_then_treated_as_unset() {
    let config = FrontendConfig::from_lookup(lookup(&[
        (BIND_ADDRESS_ENV, "   "),
        (LOG_DIR_ENV, "/tmp"),
    ]))
    .unwrap();
    assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
}
