//! Injected dependencies
//!
//! Feature reducers never reach the network or the id generator directly.
//! Everything they need arrives through these environments, so tests swap in
//! [`MockNthPrimeClient`](crate::mocks::MockNthPrimeClient) and a sequential
//! id generator.

use crate::config::AppConfig;
use crate::counter::CounterEnvironment;
use crate::is_prime_modal::IsPrimeModalEnvironment;
use futures::future::BoxFuture;
use prime_time_core::environment::{IdGenerator, UuidGenerator};
use prime_time_wolfram::{WolframAlphaClient, WolframError};
use std::sync::Arc;

/// Result of asking for the Nth prime
///
/// `NoAnswer` is an ordinary outcome. It covers every failure (network,
/// status, malformed body, no primary pod, non-numeric text) without saying which.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NthPrimeOutcome {
    /// The service answered with this prime
    Found(i64),
    /// No usable answer
    NoAnswer,
}

impl NthPrimeOutcome {
    /// The prime, if one was found
    #[must_use]
    pub const fn prime(self) -> Option<i64> {
        match self {
            Self::Found(prime) => Some(prime),
            Self::NoAnswer => None,
        }
    }
}

impl From<Option<i64>> for NthPrimeOutcome {
    fn from(prime: Option<i64>) -> Self {
        prime.map_or(Self::NoAnswer, Self::Found)
    }
}

/// Looks up the Nth prime
///
/// Single-shot and not cancelable: the returned future resolves exactly once.
pub trait NthPrimeClient: Send + Sync {
    /// Ask for the `n`th prime
    fn nth_prime(&self, n: i64) -> BoxFuture<'static, NthPrimeOutcome>;
}

impl NthPrimeClient for WolframAlphaClient {
    fn nth_prime(&self, n: i64) -> BoxFuture<'static, NthPrimeOutcome> {
        let client = self.clone();
        Box::pin(async move {
            match WolframAlphaClient::nth_prime(&client, n).await {
                Ok(prime) => NthPrimeOutcome::Found(prime),
                Err(error) => {
                    tracing::warn!(n, %error, "Nth prime lookup failed");
                    NthPrimeOutcome::NoAnswer
                },
            }
        })
    }
}

/// Environment of the whole application
///
/// Holds one environment per feature; the app reducer projects onto them.
#[derive(Clone)]
pub struct AppEnvironment {
    /// Counter feature dependencies
    pub counter: CounterEnvironment,
    /// Is-prime sheet dependencies
    pub is_prime_modal: IsPrimeModalEnvironment,
}

impl AppEnvironment {
    /// Build an environment from explicit dependencies
    #[must_use]
    pub fn new(nth_prime: Arc<dyn NthPrimeClient>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            counter: CounterEnvironment::new(nth_prime),
            is_prime_modal: IsPrimeModalEnvironment::new(ids),
        }
    }

    /// Production environment: Wolfram|Alpha and random identities
    ///
    /// # Errors
    ///
    /// Returns `WolframError::ClientBuild` if the HTTP client cannot be constructed
    pub fn live(config: &AppConfig) -> Result<Self, WolframError> {
        let client = WolframAlphaClient::new(config.wolfram())?;
        Ok(Self::new(Arc::new(client), Arc::new(UuidGenerator)))
    }

    /// Identity source shared by every feature that creates favorites
    #[must_use]
    pub fn ids(&self) -> &dyn IdGenerator {
        self.is_prime_modal.ids.as_ref()
    }
}

impl std::fmt::Debug for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnvironment").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_option() {
        assert_eq!(NthPrimeOutcome::from(Some(13)), NthPrimeOutcome::Found(13));
        assert_eq!(NthPrimeOutcome::from(None), NthPrimeOutcome::NoAnswer);
        assert_eq!(NthPrimeOutcome::Found(13).prime(), Some(13));
        assert_eq!(NthPrimeOutcome::NoAnswer.prime(), None);
    }
}
