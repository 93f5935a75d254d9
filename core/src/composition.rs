//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`pullback`**: Lift a feature reducer that works on local state, actions
//!   and environment into one that works on the whole application
//!
//! A typical application is built by pulling back each feature reducer into
//! the app domain and combining the results:
//!
//! ```
//! use prime_time_core::composition::{combine_reducers, pullback};
//! use prime_time_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct AppState {
//!     counter: CounterState,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Counter(CounterAction),
//! }
//!
//! fn counter_action(action: AppAction) -> Option<CounterAction> {
//!     match action {
//!         AppAction::Counter(action) => Some(action),
//!     }
//! }
//!
//! fn no_env(_: &()) -> &() {
//!     &()
//! }
//!
//! let app = combine_reducers(vec![Box::new(pullback(
//!     CounterReducer,
//!     |s: &AppState| s.counter.clone(),
//!     |s: &mut AppState, counter| s.counter = counter,
//!     counter_action,
//!     AppAction::Counter,
//!     no_env,
//! ))]);
//!
//! let mut state = AppState::default();
//! let _ = app.reduce(&mut state, AppAction::Counter(CounterAction::Increment), &());
//! assert_eq!(state.counter.count, 1);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and concatenated.
/// This is useful when you want to split reducer logic across multiple implementations.
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Lifts a feature reducer into a larger domain.
///
/// # Arguments
///
/// - `reducer`: The feature reducer
/// - `get_state`: Builds the feature state from the parent state. The feature
///   state may be a plain field or a view assembled from several fields.
/// - `set_state`: Writes the updated feature state back into the parent
/// - `extract_action`: Picks out the parent actions the feature handles;
///   `None` means the action is ignored and no effects are produced
/// - `embed_action`: Wraps feature actions produced by effects
/// - `get_env`: Projects the parent environment onto the feature's
#[must_use]
pub fn pullback<S, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> R::State,
    set_state: fn(&mut S, R::State),
    extract_action: fn(A) -> Option<R::Action>,
    embed_action: fn(R::Action) -> A,
    get_env: fn(&E) -> &R::Environment,
) -> PullbackReducer<S, A, E, R>
where
    R: Reducer,
{
    PullbackReducer {
        reducer,
        get_state,
        set_state,
        extract_action,
        embed_action,
        get_env,
    }
}

/// A reducer lifted into a parent domain.
///
/// Created by [`pullback`].
pub struct PullbackReducer<S, A, E, R>
where
    R: Reducer,
{
    reducer: R,
    get_state: fn(&S) -> R::State,
    set_state: fn(&mut S, R::State),
    extract_action: fn(A) -> Option<R::Action>,
    embed_action: fn(R::Action) -> A,
    get_env: fn(&E) -> &R::Environment,
}

impl<S, A, E, R> Reducer for PullbackReducer<S, A, E, R>
where
    R: Reducer,
    R::Action: Send + 'static,
    A: Send + 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(local_action) = (self.extract_action)(action) else {
            return SmallVec::new();
        };

        let mut local_state = (self.get_state)(state);
        let effects = self
            .reducer
            .reduce(&mut local_state, local_action, (self.get_env)(env));
        (self.set_state)(state, local_state);

        effects
            .into_iter()
            .map(|effect| effect.map(self.embed_action))
            .collect()
    }
}
