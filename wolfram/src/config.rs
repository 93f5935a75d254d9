//! Client configuration

use std::fmt;
use std::time::Duration;

/// Public Wolfram|Alpha endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.wolframalpha.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Wolfram|Alpha client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct WolframConfig {
    /// Application id sent as the `appid` query parameter
    pub app_id: String,

    /// Scheme and host, without the `/v2/query` path
    pub base_url: String,

    /// Whole-request timeout; an elapsed request counts as a failure
    pub timeout: Duration,
}

impl WolframConfig {
    /// Create a configuration for the public endpoint
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at another host (a mock server in tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the query endpoint
    #[must_use]
    pub fn query_url(&self) -> String {
        format!("{}/v2/query", self.base_url.trim_end_matches('/'))
    }
}

// The app id is a credential; keep it out of logs.
impl fmt::Debug for WolframConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WolframConfig")
            .field("app_id", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
