//! Host configuration parsed from environment variables.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACTIVITIES_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// A variable was set to an empty string where a value is required.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the external activities service, without trailing `/`.
    pub activities_api_url: String,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ACTIVITIES_API_URL`: default `http://127.0.0.1:8000`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 10, must be positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let activities_api_url = lookup("ACTIVITIES_API_URL")
            .unwrap_or_else(|| DEFAULT_ACTIVITIES_API_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if activities_api_url.is_empty() {
            return Err(ConfigError::Empty { var: "ACTIVITIES_API_URL" });
        }

        let timeout_secs = parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue { var: "UPSTREAM_TIMEOUT_SECS", value: "0".to_owned() });
        }

        Ok(Self { port, activities_api_url, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
