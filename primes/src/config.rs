//! Application configuration
//!
//! Read from the process environment:
//!
//! | Variable | Default |
//! |---|---|
//! | `WOLFRAM_APP_ID` | required |
//! | `WOLFRAM_BASE_URL` | `https://api.wolframalpha.com` |
//! | `WOLFRAM_TIMEOUT_SECS` | `10` |

use prime_time_wolfram::WolframConfig;
use std::time::Duration;
use thiserror::Error;

/// Wolfram|Alpha application id
pub const APP_ID_VAR: &str = "WOLFRAM_APP_ID";

/// Override for the Wolfram|Alpha host
pub const BASE_URL_VAR: &str = "WOLFRAM_BASE_URL";

/// Request timeout in whole seconds
pub const TIMEOUT_SECS_VAR: &str = "WOLFRAM_TIMEOUT_SECS";

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("Environment variable not set: {0}")]
    MissingVar(&'static str),

    /// A variable is set to something unusable
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    wolfram: WolframConfig,
}

impl AppConfig {
    /// Configuration for the public endpoint with the given app id
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            wolfram: WolframConfig::new(app_id),
        }
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingVar` if `WOLFRAM_APP_ID` is unset or blank
    /// - `ConfigError::InvalidValue` if `WOLFRAM_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from any variable source
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let app_id = read(APP_ID_VAR).ok_or(ConfigError::MissingVar(APP_ID_VAR))?;
        let mut config = Self::new(app_id.trim());

        if let Some(base_url) = read(BASE_URL_VAR) {
            config = config.with_base_url(base_url.trim());
        }

        if let Some(raw) = read(TIMEOUT_SECS_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: TIMEOUT_SECS_VAR,
                    value: raw.clone(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Load configuration from the process environment, if an app id is set
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` as for [`AppConfig::from_env`]. A missing
    /// app id is `Ok(None)`.
    pub fn from_env_optional() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup_optional(|var| std::env::var(var).ok())
    }

    /// Load configuration from any variable source, if an app id is set
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env_optional`].
    pub fn from_lookup_optional<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::from_lookup(lookup) {
            Ok(config) => Ok(Some(config)),
            Err(ConfigError::MissingVar(APP_ID_VAR)) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Set the Wolfram|Alpha host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.wolfram = self.wolfram.with_base_url(base_url);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.wolfram = self.wolfram.with_timeout(timeout);
        self
    }

    /// Client configuration for the Nth prime lookup
    #[must_use]
    pub fn wolfram(&self) -> WolframConfig {
        self.wolfram.clone()
    }
}
