//! Startup configuration, resolved once from the environment.
//!
//! Every value has a default, so a bare `blog-web` start talks to the hosted
//! API on `127.0.0.1:8080`. Lookups go through [`FrontendConfig::from_lookup`]
//! so tests can feed values without touching the process environment.

pub mod env;

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::{LevelFilter, debug, info};
use url::Url;

pub const API_URL_ENV: &str = "BLOG_API_URL";
pub const API_TIMEOUT_ENV: &str = "BLOG_API_TIMEOUT_SECS";
pub const BIND_ADDRESS_ENV: &str = "BLOG_WEB_BIND";
pub const LOG_DIR_ENV: &str = "BLOG_WEB_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "BLOG_WEB_LOG_LEVEL";
pub const SECURE_COOKIES_ENV: &str = "BLOG_WEB_SECURE_COOKIES";

pub const DEFAULT_API_URL: &str = "https://blog-backend-gjrg.onrender.com/api";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const APP_DIR_NAME: &str = "blog-web";
const LOG_DIR_NAME: &str = "logs";

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================
// API CONFIG
// ============================================

/// Where the remote blog API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Always ends in `/`, so relative joins keep any path prefix such as `/api`.
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Parse and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the value does not parse or is not http(s).
    #[track_caller]
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================
// FRONTEND CONFIG
// ============================================

/// Everything the web front end needs at startup.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub api: ApiConfig,
    pub bind_address: String,
    pub log_dir: PathBuf,
    pub log_level: LevelFilter,
    pub secure_cookies: bool,
}

impl FrontendConfig {
    /// Load `.env` (if any) and resolve config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_result = env::try_load_dotenv();
        if !env_result.loaded {
            debug!("No .env file found - using process environment only");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve config through `lookup`, falling back to defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a set value fails to parse or the result fails
    /// [`FrontendConfig::validate`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api = match value(API_URL_ENV) {
            Some(url) => {
                info!("Using API base URL from {API_URL_ENV}: {url}");
                ApiConfig::new(&url)?
            }
            None => {
                info!("{API_URL_ENV} not set, using default: {DEFAULT_API_URL}");
                ApiConfig::new(DEFAULT_API_URL)?
            }
        };

        let timeout = match value(API_TIMEOUT_ENV) {
            Some(raw) => Duration::from_secs(parse_value(API_TIMEOUT_ENV, &raw)?),
            None => DEFAULT_TIMEOUT,
        };

        let bind_address = value(BIND_ADDRESS_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let log_dir = match value(LOG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir()?,
        };

        let log_level = match value(LOG_LEVEL_ENV) {
            Some(raw) => parse_value(LOG_LEVEL_ENV, &raw)?,
            None => DEFAULT_LOG_LEVEL,
        };

        let secure_cookies = match value(SECURE_COOKIES_ENV) {
            Some(raw) => parse_value(SECURE_COOKIES_ENV, &raw.to_ascii_lowercase())?,
            None => false,
        };

        let config = Self {
            api: api.with_timeout(timeout),
            bind_address,
            log_dir,
            log_level,
            secure_cookies,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout.is_zero() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{API_TIMEOUT_ENV} must be greater than zero"),
            });
        }

        if self.bind_address.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{BIND_ADDRESS_ENV} cannot be empty"),
            });
        }

        if !matches!(self.api.base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid API URL scheme: {}", self.api.base_url),
            });
        }

        Ok(())
    }
}

// ============================================
// HELPERS
// ============================================

#[track_caller]
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        location: ErrorLocation::from(Location::caller()),
        key: API_URL_ENV,
        value: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(String::from("scheme must be http or https")));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[track_caller]
fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
        location: ErrorLocation::from(Location::caller()),
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn default_log_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_DIR_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Cannot determine a data directory. Set {LOG_DIR_ENV}."),
        })
}
