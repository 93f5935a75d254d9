//! The "is this prime?" sheet
//!
//! Shows whether the current count is prime and lets the user save it to,
//! or remove it from, the favorites.

use crate::favorites::{FavoritesStore, PrimeId, ToggleOutcome};
use crate::prime::is_prime;
use prime_time_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};
use std::sync::Arc;

/// State seen by the sheet: the count it was opened for and the favorites
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsPrimeModalState {
    /// The count being judged
    pub count: i64,
    /// Favorite primes
    pub favorites: FavoritesStore,
}

impl IsPrimeModalState {
    /// Create the sheet state
    #[must_use]
    pub const fn new(count: i64, favorites: FavoritesStore) -> Self {
        Self { count, favorites }
    }

    /// Whether the count is prime
    #[must_use]
    pub fn is_prime(&self) -> bool {
        is_prime(self.count)
    }

    /// Whether the count is already a favorite
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.favorites.contains(self.count)
    }

    /// Headline text
    #[must_use]
    pub fn verdict(&self) -> String {
        if self.is_prime() {
            format!("Yes, {} is prime 🎉", self.count)
        } else {
            format!("Nope, {} is not prime", self.count)
        }
    }

    /// Label of the favorite button; the button is hidden for non-primes
    #[must_use]
    pub fn favorite_button_title(&self) -> Option<&'static str> {
        if !self.is_prime() {
            None
        } else if self.is_favorite() {
            Some("Remove from favorites")
        } else {
            Some("Add to favorites")
        }
    }
}

/// Sheet actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsPrimeModalAction {
    /// Append the count to the favorites
    SaveFavoriteTapped,
    /// Remove every favorite equal to the count
    RemoveFavoriteTapped,
    /// Save or remove, depending on whether the count is already a favorite
    ToggleFavoriteTapped,
}

/// Sheet environment
#[derive(Clone)]
pub struct IsPrimeModalEnvironment {
    /// Identity source for new favorites
    pub ids: Arc<dyn IdGenerator>,
}

impl IsPrimeModalEnvironment {
    /// Create a new sheet environment
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    fn next_prime_id(&self) -> PrimeId {
        PrimeId::from_uuid(self.ids.next_id())
    }
}

/// Reducer for the is-prime sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct IsPrimeModalReducer;

impl IsPrimeModalReducer {
    /// Create a new sheet reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for IsPrimeModalReducer {
    type State = IsPrimeModalState;
    type Action = IsPrimeModalAction;
    type Environment = IsPrimeModalEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let count = state.count;

        match action {
            IsPrimeModalAction::SaveFavoriteTapped => {
                state.favorites.add(env.next_prime_id(), count);
                tracing::debug!(count, "Saved favorite prime");
            },
            IsPrimeModalAction::RemoveFavoriteTapped => {
                let removed = state.favorites.remove_by_value(count);
                tracing::debug!(count, removed, "Removed favorite prime");
            },
            IsPrimeModalAction::ToggleFavoriteTapped => {
                match state.favorites.toggle(env.next_prime_id(), count) {
                    ToggleOutcome::Added => tracing::debug!(count, "Saved favorite prime"),
                    ToggleOutcome::Removed(removed) => {
                        tracing::debug!(count, removed, "Removed favorite prime");
                    },
                }
            },
        }

        smallvec![Effect::None]
    }
}
