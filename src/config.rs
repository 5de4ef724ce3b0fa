use std::time::Duration;

use thiserror::Error;

use crate::constants::{ROOT, STACK_OVERFLOW};
use crate::params::Sort;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Scraper configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site to scrape.
    pub site: String,
    /// Questions to fetch per run.
    pub question_count: u32,
    /// Sort applied to the question listing.
    pub sort: Sort,
    /// Response filter token. The default includes post bodies, which
    /// the stock filter omits.
    pub filter: String,
    /// OAuth 2.0 access token, if registered with stackapps.com.
    pub access_token: Option<String>,
    /// Application key, if registered with stackapps.com.
    pub key: Option<String>,
    /// API root override (tests, proxies).
    pub root: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from `SE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            site: env_or_default("SE_SITE", STACK_OVERFLOW),
            question_count: parse_env_u32("SE_QUESTION_COUNT", 5)?,
            sort: parse_sort(&env_or_default("SE_SORT", "votes"))?,
            filter: env_or_default("SE_FILTER", "!-u2CTCBE"),
            access_token: optional_env("SE_ACCESS_TOKEN"),
            key: optional_env("SE_KEY"),
            root: env_or_default("SE_ROOT", ROOT),
            request_timeout: Duration::from_secs(parse_env_u64("SE_TIMEOUT_SECS", 30)?),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "SE_SITE".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.question_count == 0 || self.question_count > 100 {
            return Err(ConfigError::InvalidValue {
                name: "SE_QUESTION_COUNT".to_string(),
                message: "must be between 1 and 100".to_string(),
            });
        }
        Ok(())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_sort(value: &str) -> Result<Sort, ConfigError> {
    Sort::from_str(&value.to_lowercase()).ok_or_else(|| ConfigError::InvalidValue {
        name: "SE_SORT".to_string(),
        message: format!(
            "must be one of activity, creation, hot, week, month, votes; got '{value}'"
        ),
    })
}
