//! Wolfram|Alpha API client implementation

use crate::{config::WolframConfig, error::WolframError, types::WolframAlphaResult};
use reqwest::{Client, StatusCode};

/// Wolfram|Alpha query client
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct WolframAlphaClient {
    client: Client,
    config: WolframConfig,
}

impl WolframAlphaClient {
    /// Create a client with explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `WolframError::ClientBuild` if the TLS backend cannot be initialized
    pub fn new(config: WolframConfig) -> Result<Self, WolframError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WolframError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &WolframConfig {
        &self.config
    }

    /// Run a free-form query and return the decoded result
    ///
    /// # Errors
    ///
    /// Returns errors for network failures (including timeouts), non-success
    /// statuses, or bodies that are not a query result. Errors never carry the
    /// request URL, since it holds the app id.
    #[tracing::instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn query(&self, input: &str) -> Result<WolframAlphaResult, WolframError> {
        let response = self
            .client
            .get(self.config.query_url())
            .query(&[
                ("input", input),
                ("format", "plaintext"),
                ("output", "JSON"),
                ("appid", self.config.app_id.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WolframError::RequestFailed(e.without_url().to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<WolframAlphaResult>()
                .await
                .map_err(|e| WolframError::ResponseParseFailed(e.without_url().to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(WolframError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(WolframError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }

    /// Ask for the `n`th prime
    ///
    /// Sends `prime {n}` and reads the integer from the primary pod.
    ///
    /// # Errors
    ///
    /// Any error from [`query`](Self::query), plus
    /// `WolframError::NoPrimaryPod` / `WolframError::NotAnInteger` when the
    /// response has no usable answer
    pub async fn nth_prime(&self, n: i64) -> Result<i64, WolframError> {
        let result = self.query(&format!("prime {n}")).await?;
        let prime = result.primary_integer()?;
        tracing::debug!(n, prime, "Wolfram|Alpha answered");
        Ok(prime)
    }
}
