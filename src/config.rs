//! Client configuration parsed from environment-style key lookups.
//!
//! Native callers read the process environment; the WASM client passes values
//! captured at build time with `option_env!`. Both go through
//! [`ClientConfig::from_lookup`] so parsing rules stay identical.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

pub const API_BASE_URL_VAR: &str = "ESCENARTE_API_BASE_URL";
pub const PAYMENT_KEY_VAR: &str = "ESCENARTE_PAYMENT_PUBLISHABLE_KEY";
pub const REQUEST_TIMEOUT_VAR: &str = "ESCENARTE_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "ESCENARTE_CONNECT_TIMEOUT_SECS";

/// Configuration values that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{0}': expected http(s):// or a root-relative path")]
    InvalidBaseUrl(String),

    #[error("invalid value for {var}: '{value}' is not a positive integer")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend API root without a trailing slash, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    /// Publishable key for the card-payment processor. Opaque to the core.
    pub payment_publishable_key: Option<String>,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            payment_publishable_key: None,
            timeouts: Timeouts::default(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `api_base_url` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for URLs that are neither
    /// absolute `http(s)` nor root-relative.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { api_base_url: normalize_base_url(api_base_url)?, ..Self::default() })
    }

    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `ESCENARTE_API_BASE_URL`: default `http://localhost:5000/api`
    /// - `ESCENARTE_PAYMENT_PUBLISHABLE_KEY`: unset disables payments
    /// - `ESCENARTE_REQUEST_TIMEOUT_SECS`: default 10
    /// - `ESCENARTE_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a present value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base_url = match get(API_BASE_URL_VAR) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let timeouts = Timeouts {
            request_secs: parse_secs(REQUEST_TIMEOUT_VAR, get(REQUEST_TIMEOUT_VAR), DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_secs(CONNECT_TIMEOUT_VAR, get(CONNECT_TIMEOUT_VAR), DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { api_base_url, payment_publishable_key: get(PAYMENT_KEY_VAR), timeouts })
    }

    /// Whether a payment processor key was configured.
    #[must_use]
    pub fn payments_enabled(&self) -> bool {
        self.payment_publishable_key.is_some()
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let valid = trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/');
    if !valid {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidNumber { var, value }),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
