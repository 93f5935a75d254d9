//! # Prime Time
//!
//! A counter, a primality check, a list of favorite primes and a
//! "what is the Nth prime?" lookup, built as pure reducers driven by a store.
//!
//! ## Features
//!
//! - [`counter`]: bounded counter, sheet toggle and the Nth prime lookup
//! - [`is_prime_modal`]: the "is this prime?" sheet with its favorite button
//! - [`favorites`]: the favorites list and its row deletion
//! - [`app`]: all of the above pulled back onto one [`AppState`]
//!
//! The only side effect is the lookup, described as an `Effect::Future` and
//! run by the store. Its result comes back as
//! [`CounterAction::NthPrimeResponse`].
//!
//! ## Example
//!
//! ```no_run
//! use prime_time::{AppAction, AppEnvironment, AppReducer, AppState, CounterAction};
//! use prime_time::mocks::MockNthPrimeClient;
//! use prime_time_core::environment::UuidGenerator;
//! use prime_time_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), prime_time_runtime::StoreError> {
//! let env = AppEnvironment::new(
//!     Arc::new(MockNthPrimeClient::first_hundred()),
//!     Arc::new(UuidGenerator),
//! );
//! let store = Store::new(AppState::default(), AppReducer::new(), env);
//!
//! store.send(AppAction::Counter(CounterAction::Increment)).await?;
//! let mut handle = store
//!     .send(AppAction::Counter(CounterAction::NthPrimeButtonTapped))
//!     .await?;
//! handle.wait().await;
//!
//! let message = store
//!     .state(|s| s.nth_prime.alert.map(|alert| alert.message()))
//!     .await;
//! assert_eq!(message.as_deref(), Some("The 1st prime is 2"));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod counter;
pub mod environment;
pub mod favorites;
pub mod is_prime_modal;
pub mod mocks;
pub mod prime;

pub use app::{AppAction, AppReducer, AppState, AppStore};
pub use config::{AppConfig, ConfigError};
pub use counter::{
    COUNT_MAX, COUNT_MIN, CounterAction, CounterEnvironment, CounterFeatureState, CounterReducer,
    CounterState, NthPrimeAlert, NthPrimeState,
};
pub use environment::{AppEnvironment, NthPrimeClient, NthPrimeOutcome};
pub use favorites::{
    FavoritePrime, FavoritePrimesAction, FavoritePrimesReducer, FavoritesError, FavoritesStore,
    PrimeId, ToggleOutcome,
};
pub use is_prime_modal::{
    IsPrimeModalAction, IsPrimeModalEnvironment, IsPrimeModalReducer, IsPrimeModalState,
};
pub use prime::{is_prime, ordinal, ordinal_suffix};
