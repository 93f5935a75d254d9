//! In-memory Nth prime lookup
//!
//! Used by tests and by the demo binary when no Wolfram|Alpha app id is
//! configured.

use crate::environment::{NthPrimeClient, NthPrimeOutcome};
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Answers from a fixed table; unknown `n` yields `NoAnswer`
#[derive(Debug, Default)]
pub struct MockNthPrimeClient {
    answers: HashMap<i64, i64>,
    latency: Option<Duration>,
    calls: Mutex<Vec<i64>>,
}

impl MockNthPrimeClient {
    /// A client that knows no primes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that knows the first hundred primes
    #[must_use]
    pub fn first_hundred() -> Self {
        let primes = (2_i64..)
            .filter(|&candidate| crate::prime::is_prime(candidate))
            .take(100);
        (1_i64..).zip(primes).fold(Self::new(), |client, (n, prime)| {
            client.with_answer(n, prime)
        })
    }

    /// Answer `prime` when asked for the `n`th prime
    #[must_use]
    pub fn with_answer(mut self, n: i64, prime: i64) -> Self {
        self.answers.insert(n, prime);
        self
    }

    /// Wait this long before answering
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Every `n` asked for, in order
    #[must_use]
    pub fn calls(&self) -> Vec<i64> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NthPrimeClient for MockNthPrimeClient {
    fn nth_prime(&self, n: i64) -> BoxFuture<'static, NthPrimeOutcome> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(n);

        let outcome = NthPrimeOutcome::from(self.answers.get(&n).copied());
        let latency = self.latency;

        Box::pin(async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_from_table() {
        let client = MockNthPrimeClient::new().with_answer(6, 13);

        assert_eq!(tokio_test::block_on(client.nth_prime(6)), NthPrimeOutcome::Found(13));
        assert_eq!(tokio_test::block_on(client.nth_prime(7)), NthPrimeOutcome::NoAnswer);
        assert_eq!(client.calls(), vec![6, 7]);
    }

    #[test]
    fn test_first_hundred() {
        let client = MockNthPrimeClient::first_hundred();

        assert_eq!(tokio_test::block_on(client.nth_prime(1)), NthPrimeOutcome::Found(2));
        assert_eq!(tokio_test::block_on(client.nth_prime(7)), NthPrimeOutcome::Found(17));
        assert_eq!(tokio_test::block_on(client.nth_prime(100)), NthPrimeOutcome::Found(541));
        assert_eq!(tokio_test::block_on(client.nth_prime(0)), NthPrimeOutcome::NoAnswer);
    }
}
