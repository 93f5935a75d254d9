//! Application state, actions and the composed reducer

use crate::counter::{
    CounterAction, CounterEnvironment, CounterFeatureState, CounterReducer, CounterState,
    NthPrimeState,
};
use crate::environment::AppEnvironment;
use crate::favorites::{FavoritePrimesAction, FavoritePrimesReducer, FavoritesStore, PrimeId};
use crate::is_prime_modal::{
    IsPrimeModalAction, IsPrimeModalEnvironment, IsPrimeModalReducer, IsPrimeModalState,
};
use prime_time_core::composition::{CombinedReducer, combine_reducers, pullback};
use prime_time_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use prime_time_runtime::Store;

/// Root state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// The counter
    pub counter: CounterState,
    /// Favorite primes, in the order they were saved
    pub favorites: FavoritesStore,
    /// Whether the is-prime sheet is presented
    pub is_prime_modal_shown: bool,
    /// Nth prime lookup
    pub nth_prime: NthPrimeState,
}

impl AppState {
    /// Current count
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.counter.current()
    }

    /// The counter screen's view of the state
    #[must_use]
    pub const fn counter_feature(&self) -> CounterFeatureState {
        CounterFeatureState {
            counter: self.counter,
            is_prime_modal_shown: self.is_prime_modal_shown,
            nth_prime: self.nth_prime,
        }
    }

    /// The is-prime sheet's view of the state
    #[must_use]
    pub fn is_prime_modal(&self) -> IsPrimeModalState {
        IsPrimeModalState::new(self.count(), self.favorites.clone())
    }
}

/// Root actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Counter screen
    Counter(CounterAction),
    /// Is-prime sheet
    IsPrimeModal(IsPrimeModalAction),
    /// Favorite primes list
    FavoritePrimes(FavoritePrimesAction),
    /// Append a value to the favorites directly, prime or not
    AddFavorite(i64),
}

/// Store type for the whole application
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

type FeatureReducer = Box<
    dyn Reducer<State = AppState, Action = AppAction, Environment = AppEnvironment> + Send + Sync,
>;

/// Root reducer: every feature pulled back onto [`AppState`]
pub struct AppReducer {
    features: CombinedReducer<AppState, AppAction, AppEnvironment>,
}

impl AppReducer {
    /// Compose the feature reducers
    #[must_use]
    pub fn new() -> Self {
        let features: Vec<FeatureReducer> = vec![
            Box::new(pullback(
                CounterReducer::new(),
                AppState::counter_feature,
                set_counter_feature,
                counter_action,
                AppAction::Counter,
                counter_env,
            )),
            Box::new(pullback(
                IsPrimeModalReducer::new(),
                AppState::is_prime_modal,
                set_is_prime_modal,
                is_prime_modal_action,
                AppAction::IsPrimeModal,
                is_prime_modal_env,
            )),
            Box::new(pullback(
                FavoritePrimesReducer::new(),
                favorites,
                set_favorites,
                favorite_primes_action,
                AppAction::FavoritePrimes,
                no_env,
            )),
        ];

        Self {
            features: combine_reducers(features),
        }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::AddFavorite(value) => {
                state
                    .favorites
                    .add(PrimeId::from_uuid(env.ids().next_id()), value);
                tracing::debug!(value, "Added favorite");
                smallvec![Effect::None]
            },
            action => self.features.reduce(state, action, env),
        }
    }
}

fn set_counter_feature(state: &mut AppState, feature: CounterFeatureState) {
    state.counter = feature.counter;
    state.is_prime_modal_shown = feature.is_prime_modal_shown;
    state.nth_prime = feature.nth_prime;
}

// The sheet cannot change the count; only the favorites flow back.
fn set_is_prime_modal(state: &mut AppState, modal: IsPrimeModalState) {
    state.favorites = modal.favorites;
}

fn favorites(state: &AppState) -> FavoritesStore {
    state.favorites.clone()
}

fn set_favorites(state: &mut AppState, favorites: FavoritesStore) {
    state.favorites = favorites;
}

fn counter_action(action: AppAction) -> Option<CounterAction> {
    match action {
        AppAction::Counter(action) => Some(action),
        _ => None,
    }
}

fn is_prime_modal_action(action: AppAction) -> Option<IsPrimeModalAction> {
    match action {
        AppAction::IsPrimeModal(action) => Some(action),
        _ => None,
    }
}

fn favorite_primes_action(action: AppAction) -> Option<FavoritePrimesAction> {
    match action {
        AppAction::FavoritePrimes(action) => Some(action),
        _ => None,
    }
}

const fn counter_env(env: &AppEnvironment) -> &CounterEnvironment {
    &env.counter
}

const fn is_prime_modal_env(env: &AppEnvironment) -> &IsPrimeModalEnvironment {
    &env.is_prime_modal
}

const fn no_env(_env: &AppEnvironment) -> &() {
    &()
}
