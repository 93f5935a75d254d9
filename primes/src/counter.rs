//! Counter feature
//!
//! A bounded counter, the "is this prime?" sheet toggle and the
//! "what is the Nth prime?" lookup.
//!
//! At most one lookup is outstanding: a tap while a request is in flight is
//! ignored. The in-flight flag stays set while the answer is on screen and is
//! cleared when the alert is dismissed.

use crate::environment::{NthPrimeClient, NthPrimeOutcome};
use crate::prime::ordinal;
use prime_time_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Lowest value the counter can hold
pub const COUNT_MIN: i64 = 0;

/// Highest value the counter can hold
pub const COUNT_MAX: i64 = 100;

/// Bounded counter, always within `[COUNT_MIN, COUNT_MAX]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    count: i64,
}

impl CounterState {
    /// A counter at `count`, clamped into range
    #[must_use]
    pub const fn with_count(count: i64) -> Self {
        Self {
            count: if count < COUNT_MIN {
                COUNT_MIN
            } else if count > COUNT_MAX {
                COUNT_MAX
            } else {
                count
            },
        }
    }

    /// Add one, unless already at the ceiling
    pub fn increment(&mut self) {
        self.count = (self.count + 1).min(COUNT_MAX);
    }

    /// Subtract one, unless already at the floor
    pub fn decrement(&mut self) {
        self.count = (self.count - 1).max(COUNT_MIN);
    }

    /// Current value
    #[must_use]
    pub const fn current(&self) -> i64 {
        self.count
    }

    /// Whether `decrement` would change anything
    #[must_use]
    pub const fn can_decrement(&self) -> bool {
        self.count > COUNT_MIN
    }
}

/// An answer waiting to be acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthPrimeAlert {
    /// Which prime was asked for
    pub n: i64,
    /// What came back
    pub outcome: NthPrimeOutcome,
}

impl NthPrimeAlert {
    /// Alert body, e.g. "The 7th prime is 17"
    #[must_use]
    pub fn message(&self) -> String {
        match self.outcome {
            NthPrimeOutcome::Found(prime) => format!("The {} prime is {prime}", ordinal(self.n)),
            NthPrimeOutcome::NoAnswer => format!("No answer for the {} prime", ordinal(self.n)),
        }
    }
}

/// Progress of the Nth prime lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NthPrimeState {
    /// A request was issued and its alert has not been dismissed yet
    pub in_flight: bool,
    /// The answer currently shown
    pub alert: Option<NthPrimeAlert>,
}

/// Everything the counter screen reads and writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterFeatureState {
    /// The counter
    pub counter: CounterState,
    /// Whether the is-prime sheet is presented
    pub is_prime_modal_shown: bool,
    /// Nth prime lookup
    pub nth_prime: NthPrimeState,
}

impl CounterFeatureState {
    /// Title of the lookup button, e.g. "What is the 7th prime?"
    #[must_use]
    pub fn nth_prime_button_title(&self) -> String {
        format!("What is the {} prime?", ordinal(self.counter.current()))
    }

    /// Whether the lookup button is enabled
    #[must_use]
    pub const fn can_request_nth_prime(&self) -> bool {
        !self.nth_prime.in_flight
    }
}

/// Counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// "+" tapped
    Increment,
    /// "-" tapped
    Decrement,
    /// "What is the Nth prime?" tapped
    NthPrimeButtonTapped,
    /// The lookup for `n` finished
    NthPrimeResponse {
        /// Which prime was asked for
        n: i64,
        /// What came back
        outcome: NthPrimeOutcome,
    },
    /// The answer alert was dismissed
    AlertDismissed,
    /// "Is this prime?" tapped
    IsPrimeButtonTapped,
    /// The is-prime sheet was closed
    IsPrimeModalDismissed,
}

/// Counter environment
#[derive(Clone)]
pub struct CounterEnvironment {
    /// Nth prime lookup service
    pub nth_prime: Arc<dyn NthPrimeClient>,
}

impl CounterEnvironment {
    /// Create a new counter environment with the given lookup service
    #[must_use]
    pub fn new(nth_prime: Arc<dyn NthPrimeClient>) -> Self {
        Self { nth_prime }
    }
}

/// Counter reducer
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterFeatureState;
    type Action = CounterAction;
    type Environment = CounterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => state.counter.increment(),
            CounterAction::Decrement => state.counter.decrement(),
            CounterAction::NthPrimeButtonTapped => {
                if state.nth_prime.in_flight {
                    tracing::debug!("Nth prime request already in flight, ignoring tap");
                    return smallvec![Effect::None];
                }

                let n = state.counter.current();
                state.nth_prime.in_flight = true;
                tracing::debug!(n, "Requesting nth prime");

                let lookup = env.nth_prime.nth_prime(n);
                return smallvec![Effect::Future(Box::pin(async move {
                    let outcome = lookup.await;
                    Some(CounterAction::NthPrimeResponse { n, outcome })
                }))];
            },
            CounterAction::NthPrimeResponse { n, outcome } => {
                tracing::debug!(n, ?outcome, "Nth prime answered");
                state.nth_prime.alert = Some(NthPrimeAlert { n, outcome });
            },
            CounterAction::AlertDismissed => {
                if state.nth_prime.alert.is_none() {
                    tracing::debug!("No alert showing, ignoring dismiss");
                    return smallvec![Effect::None];
                }
                state.nth_prime.alert = None;
                state.nth_prime.in_flight = false;
            },
            CounterAction::IsPrimeButtonTapped => state.is_prime_modal_shown = true,
            CounterAction::IsPrimeModalDismissed => state.is_prime_modal_shown = false,
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockNthPrimeClient;
    use prime_time_testing::{ReducerTest, assertions, collect_actions};
    use proptest::prelude::*;

    fn env_with(client: MockNthPrimeClient) -> CounterEnvironment {
        CounterEnvironment::new(Arc::new(client))
    }

    fn at(count: i64) -> CounterFeatureState {
        CounterFeatureState {
            counter: CounterState::with_count(count),
            ..CounterFeatureState::default()
        }
    }

    #[test]
    fn test_decrement_at_floor_is_noop() {
        let mut counter = CounterState::default();
        assert!(!counter.can_decrement());
        counter.decrement();
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn test_increment_clamps_at_ceiling() {
        let mut counter = CounterState::default();
        for _ in 0..101 {
            counter.increment();
        }
        assert_eq!(counter.current(), 100);

        counter.decrement();
        counter.increment();
        assert_eq!(counter.current(), 100);
    }

    #[test]
    fn test_with_count_clamps() {
        assert_eq!(CounterState::with_count(-5).current(), COUNT_MIN);
        assert_eq!(CounterState::with_count(500).current(), COUNT_MAX);
        assert_eq!(CounterState::with_count(42).current(), 42);
    }

    #[test]
    fn test_increment_action() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env_with(MockNthPrimeClient::new()))
            .given_state(CounterFeatureState::default())
            .when_action(CounterAction::Increment)
            .when_action(CounterAction::Increment)
            .when_action(CounterAction::Decrement)
            .then_state(|state| assert_eq!(state.counter.current(), 1))
            .then_effects(|effects| assertions::assert_no_effects(effects))
            .run();
    }

    #[test]
    fn test_is_prime_sheet_toggles() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env_with(MockNthPrimeClient::new()))
            .given_state(at(7))
            .when_action(CounterAction::IsPrimeButtonTapped)
            .then_state(|state| assert!(state.is_prime_modal_shown))
            .run();

        ReducerTest::new(CounterReducer::new())
            .with_env(env_with(MockNthPrimeClient::new()))
            .given_state(at(7))
            .when_actions([
                CounterAction::IsPrimeButtonTapped,
                CounterAction::IsPrimeModalDismissed,
            ])
            .then_state(|state| assert!(!state.is_prime_modal_shown))
            .run();
    }

    #[test]
    fn test_nth_prime_tap_starts_request() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env_with(MockNthPrimeClient::new().with_answer(7, 17)))
            .given_state(at(7))
            .when_action(CounterAction::NthPrimeButtonTapped)
            .then_state(|state| {
                assert!(state.nth_prime.in_flight);
                assert!(!state.can_request_nth_prime());
                assert_eq!(state.nth_prime.alert, None);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_second_tap_while_in_flight_is_ignored() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env_with(MockNthPrimeClient::new()))
            .given_state(CounterFeatureState {
                nth_prime: NthPrimeState {
                    in_flight: true,
                    alert: None,
                },
                ..at(7)
            })
            .when_action(CounterAction::NthPrimeButtonTapped)
            .then_effects(|effects| assertions::assert_no_effects(effects))
            .run();
    }

    #[test]
    fn test_dismiss_without_alert_keeps_request_outstanding() {
        let client = Arc::new(MockNthPrimeClient::new().with_answer(7, 17));

        ReducerTest::new(CounterReducer::new())
            .with_env(CounterEnvironment::new(client.clone()))
            .given_state(at(7))
            .when_actions([
                CounterAction::NthPrimeButtonTapped,
                CounterAction::AlertDismissed,
                CounterAction::NthPrimeButtonTapped,
            ])
            .then_state(|state| {
                assert!(state.nth_prime.in_flight);
                assert!(!state.can_request_nth_prime());
            })
            .then_effects(|effects| {
                let futures = effects
                    .iter()
                    .filter(|effect| matches!(effect, Effect::Future(_)))
                    .count();
                assert_eq!(futures, 1);
            })
            .run();

        assert_eq!(client.calls(), vec![7]);
    }

    #[test]
    fn test_effect_feeds_back_response() {
        let client = Arc::new(MockNthPrimeClient::new().with_answer(7, 17));
        let env = CounterEnvironment::new(client.clone());
        let mut state = at(7);

        let effects =
            CounterReducer::new().reduce(&mut state, CounterAction::NthPrimeButtonTapped, &env);
        let actions = tokio_test::block_on(collect_actions(effects));

        assert_eq!(
            actions,
            vec![CounterAction::NthPrimeResponse {
                n: 7,
                outcome: NthPrimeOutcome::Found(17),
            }]
        );
        assert_eq!(client.calls(), vec![7]);
    }

    #[test]
    fn test_response_shows_alert_and_dismiss_reenables() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env_with(MockNthPrimeClient::new()))
            .given_state(at(7))
            .when_action(CounterAction::NthPrimeButtonTapped)
            .when_action(CounterAction::NthPrimeResponse {
                n: 7,
                outcome: NthPrimeOutcome::NoAnswer,
            })
            .then_state(|state| {
                assert!(state.nth_prime.in_flight);
                let message = state.nth_prime.alert.map(|alert| alert.message());
                assert_eq!(message.as_deref(), Some("No answer for the 7th prime"));
            })
            .run();

        ReducerTest::new(CounterReducer::new())
            .with_env(env_with(MockNthPrimeClient::new()))
            .given_state(CounterFeatureState {
                nth_prime: NthPrimeState {
                    in_flight: true,
                    alert: Some(NthPrimeAlert {
                        n: 7,
                        outcome: NthPrimeOutcome::Found(17),
                    }),
                },
                ..at(7)
            })
            .when_action(CounterAction::AlertDismissed)
            .then_state(|state| {
                assert_eq!(state.nth_prime, NthPrimeState::default());
                assert!(state.can_request_nth_prime());
            })
            .run();
    }

    #[test]
    fn test_alert_message() {
        let found = NthPrimeAlert {
            n: 7,
            outcome: NthPrimeOutcome::Found(17),
        };
        assert_eq!(found.message(), "The 7th prime is 17");

        let missing = NthPrimeAlert {
            n: 22,
            outcome: NthPrimeOutcome::NoAnswer,
        };
        assert_eq!(missing.message(), "No answer for the 22nd prime");
    }

    #[test]
    fn test_button_title() {
        assert_eq!(at(1).nth_prime_button_title(), "What is the 1st prime?");
        assert_eq!(at(13).nth_prime_button_title(), "What is the 13th prime?");
    }

    proptest! {
        #[test]
        fn prop_counter_stays_in_bounds(steps in prop::collection::vec(any::<bool>(), 0..300)) {
            let mut counter = CounterState::default();
            for up in steps {
                if up {
                    counter.increment();
                } else {
                    counter.decrement();
                }
                prop_assert!((COUNT_MIN..=COUNT_MAX).contains(&counter.current()));
            }
        }
    }
}
