//! # Prime Time Testing
//!
//! Testing utilities and helpers for the Prime Time state architecture.
//!
//! This crate provides:
//! - A sequential identity generator for predictable ids
//! - A Given-When-Then builder for reducers
//! - Helpers to drive effects without a runtime
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use prime_time_testing::{ReducerTest, SequentialIdGenerator};
//!
//! ReducerTest::new(IsPrimeModalReducer)
//!     .with_env(env)
//!     .given_state(IsPrimeModalState::new(7, FavoritesStore::new()))
//!     .when_action(IsPrimeModalAction::SaveFavoriteTapped)
//!     .then_state(|state| assert!(state.favorites.contains(7)))
//!     .run();
//! ```

use prime_time_core::environment::IdGenerator;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Predictable identities: `00000000-0000-0000-0000-000000000001`, `...002`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Start a new sequence at 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }

        /// The identity the `n`th call (1-based) returns
        #[must_use]
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u64_pair(0, n)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            Self::nth(n)
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    use prime_time_core::effect::Effect;
    use std::collections::VecDeque;

    /// Drive effects to completion without a store and collect the actions
    /// they feed back, in order.
    ///
    /// Delays are not slept; their action is collected immediately.
    /// Parallel effects are driven one after another.
    pub async fn collect_actions<A>(effects: impl IntoIterator<Item = Effect<A>>) -> Vec<A> {
        let mut pending: VecDeque<Effect<A>> = effects.into_iter().collect();
        let mut actions = Vec::new();

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::None => {},
                Effect::Future(fut) => {
                    if let Some(action) = fut.await {
                        actions.push(action);
                    }
                },
                Effect::Delay { action, .. } => actions.push(*action),
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    for effect in effects.into_iter().rev() {
                        pending.push_front(effect);
                    }
                },
            }
        }

        actions
    }
}

// Re-export commonly used items
pub use helpers::collect_actions;
pub use mocks::SequentialIdGenerator;
