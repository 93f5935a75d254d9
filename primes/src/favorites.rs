//! Favorite primes: the ordered list and the list screen's reducer
//!
//! The list is insertion-ordered and enforces no uniqueness on its own.
//! Callers that want one entry per value go through [`FavoritesStore::toggle`]
//! or check [`FavoritesStore::contains`] first.

use prime_time_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Identity of a favorite entry, independent of its value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimeId(Uuid);

impl PrimeId {
    /// Wrap an identity produced by an `IdGenerator`
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PrimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the favorites list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FavoritePrime {
    /// Stable identity
    pub id: PrimeId,
    /// The saved number (believed prime by the user, not validated)
    pub value: i64,
}

/// Errors from positional removal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FavoritesError {
    /// Position outside `[0, len)`
    #[error("position {position} is out of range for {len} favorites")]
    IndexOutOfRange {
        /// Requested position
        position: usize,
        /// List length at the time of the call
        len: usize,
    },
}

/// What [`FavoritesStore::toggle`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The value was absent and has been appended
    Added,
    /// The value was present; this many entries were removed
    Removed(usize),
}

/// Insertion-ordered list of favorite primes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoritesStore {
    entries: Vec<FavoritePrime>,
}

impl FavoritesStore {
    /// An empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether any entry holds `value`
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.entries.iter().any(|entry| entry.value == value)
    }

    /// Append a new entry. Always succeeds; duplicates are allowed.
    pub fn add(&mut self, id: PrimeId, value: i64) {
        self.entries.push(FavoritePrime { id, value });
    }

    /// Remove every entry holding `value`, returning how many were removed
    pub fn remove_by_value(&mut self, value: i64) -> usize {
        self.remove_where(|entry| entry.value == value)
    }

    /// Remove every entry matching `predicate`, returning how many were removed
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&FavoritePrime) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| !predicate(entry));
        before - self.entries.len()
    }

    /// Remove the entry at `position`
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::IndexOutOfRange`] if `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<FavoritePrime, FavoritesError> {
        self.check_position(position)?;
        Ok(self.entries.remove(position))
    }

    /// Remove several rows at once, as a list view deletes a selection
    ///
    /// Positions refer to the list before any removal. Duplicates are ignored.
    /// Returns the removed entries in list order.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::IndexOutOfRange`] for the first invalid
    /// position; the list is left untouched in that case.
    pub fn remove_at_positions(
        &mut self,
        positions: &[usize],
    ) -> Result<Vec<FavoritePrime>, FavoritesError> {
        for &position in positions {
            self.check_position(position)?;
        }

        let mut sorted = positions.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut removed: Vec<FavoritePrime> = sorted
            .iter()
            .rev()
            .map(|&position| self.entries.remove(position))
            .collect();
        removed.reverse();
        Ok(removed)
    }

    /// Remove `value` if present, otherwise append it under `id`
    pub fn toggle(&mut self, id: PrimeId, value: i64) -> ToggleOutcome {
        if self.contains(value) {
            ToggleOutcome::Removed(self.remove_by_value(value))
        } else {
            self.add(id, value);
            ToggleOutcome::Added
        }
    }

    /// Entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, FavoritePrime> {
        self.entries.iter()
    }

    /// Saved values in insertion order
    #[must_use]
    pub fn values(&self) -> Vec<i64> {
        self.entries.iter().map(|entry| entry.value).collect()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_position(&self, position: usize) -> Result<(), FavoritesError> {
        if position < self.entries.len() {
            Ok(())
        } else {
            Err(FavoritesError::IndexOutOfRange {
                position,
                len: self.entries.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a FavoritesStore {
    type Item = &'a FavoritePrime;
    type IntoIter = std::slice::Iter<'a, FavoritePrime>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Actions of the favorite primes list screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FavoritePrimesAction {
    /// Swipe-to-delete of one or more rows
    DeleteAt(Vec<usize>),
}

/// Reducer for the favorite primes list screen
#[derive(Debug, Clone, Copy, Default)]
pub struct FavoritePrimesReducer;

impl FavoritePrimesReducer {
    /// Create a new favorite primes reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FavoritePrimesReducer {
    type State = FavoritesStore;
    type Action = FavoritePrimesAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FavoritePrimesAction::DeleteAt(positions) => {
                match state.remove_at_positions(&positions) {
                    Ok(removed) => {
                        tracing::debug!(count = removed.len(), "Deleted favorite primes");
                    },
                    Err(error) => {
                        // Rows come from the rendered list, so this is a caller bug.
                        tracing::warn!(%error, ?positions, "Ignoring invalid delete");
                    },
                }
            },
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prime_time_testing::{ReducerTest, SequentialIdGenerator, assertions};
    use proptest::prelude::*;

    fn id(n: u64) -> PrimeId {
        PrimeId::from_uuid(SequentialIdGenerator::nth(n))
    }

    fn store_of(values: &[i64]) -> FavoritesStore {
        let mut store = FavoritesStore::new();
        for (n, &value) in (1..).zip(values) {
            store.add(id(n), value);
        }
        store
    }

    #[test]
    fn test_add_then_contains() {
        let mut store = FavoritesStore::new();
        store.add(id(1), 7);
        assert!(store.contains(7));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut store = FavoritesStore::new();
        store.add(id(1), 7);
        store.add(id(2), 7);
        assert_eq!(store.values(), vec![7, 7]);
    }

    #[test]
    fn test_remove_by_value() {
        let mut store = store_of(&[7, 11, 7]);
        assert_eq!(store.remove_by_value(7), 2);
        assert!(!store.contains(7));
        assert_eq!(store.values(), vec![11]);

        assert_eq!(store.remove_by_value(5), 0);
        assert_eq!(store.values(), vec![11]);
    }

    #[test]
    fn test_remove_at() {
        let mut store = store_of(&[5]);
        let removed = store.remove_at(0);
        assert_eq!(removed, Ok(FavoritePrime { id: id(1), value: 5 }));
        assert!(store.is_empty());

        assert_eq!(
            store.remove_at(0),
            Err(FavoritesError::IndexOutOfRange { position: 0, len: 0 })
        );
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut store = store_of(&[2, 3, 5, 7]);
        let _ = store.remove_at(1);
        assert_eq!(store.values(), vec![2, 5, 7]);
    }

    #[test]
    fn test_remove_at_positions() {
        let mut store = store_of(&[2, 3, 5, 7, 11]);
        let removed = store.remove_at_positions(&[3, 0, 3]);

        assert_eq!(
            removed.map(|entries| entries.iter().map(|e| e.value).collect::<Vec<_>>()),
            Ok(vec![2, 7])
        );
        assert_eq!(store.values(), vec![3, 5, 11]);
    }

    #[test]
    fn test_remove_at_positions_is_all_or_nothing() {
        let mut store = store_of(&[2, 3]);
        assert_eq!(
            store.remove_at_positions(&[0, 2]),
            Err(FavoritesError::IndexOutOfRange { position: 2, len: 2 })
        );
        assert_eq!(store.values(), vec![2, 3]);
    }

    #[test]
    fn test_remove_where() {
        let mut store = store_of(&[2, 4, 5, 6]);
        let removed = store.remove_where(|entry| entry.value % 2 == 0);
        assert_eq!(removed, 3);
        assert_eq!(store.values(), vec![5]);
    }

    #[test]
    fn test_toggle() {
        let mut store = store_of(&[3]);
        assert_eq!(store.toggle(id(2), 11), ToggleOutcome::Added);
        assert_eq!(store.values(), vec![3, 11]);
        assert_eq!(store.toggle(id(3), 11), ToggleOutcome::Removed(1));
        assert_eq!(store.values(), vec![3]);
    }

    #[test]
    fn test_iteration_yields_ids() {
        let store = store_of(&[2, 3]);
        let ids: Vec<PrimeId> = (&store).into_iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![id(1), id(2)]);
    }

    #[test]
    fn test_reducer_deletes_rows() {
        ReducerTest::new(FavoritePrimesReducer::new())
            .with_env(())
            .given_state(store_of(&[2, 3, 5]))
            .when_action(FavoritePrimesAction::DeleteAt(vec![0, 2]))
            .then_state(|state| assert_eq!(state.values(), vec![3]))
            .then_effects(|effects| assertions::assert_no_effects(effects))
            .run();
    }

    #[test]
    fn test_reducer_ignores_invalid_rows() {
        ReducerTest::new(FavoritePrimesReducer::new())
            .with_env(())
            .given_state(store_of(&[2]))
            .when_action(FavoritePrimesAction::DeleteAt(vec![0, 4]))
            .then_state(|state| assert_eq!(state.values(), vec![2]))
            .then_effects(|effects| assertions::assert_no_effects(effects))
            .run();
    }

    proptest! {
        #[test]
        fn prop_toggle_twice_restores(
            values in prop::collection::vec(0_i64..20, 0..8),
            value in 0_i64..20,
        ) {
            let mut store = store_of(&values);
            let original = store.values();

            // A value already present more than once comes back only once.
            prop_assume!(values.iter().filter(|&&v| v == value).count() <= 1);

            let _ = store.toggle(id(100), value);
            let _ = store.toggle(id(101), value);

            let mut restored = store.values();
            let mut expected = original;
            restored.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(restored, expected);
        }

        #[test]
        fn prop_remove_by_value_clears_value(
            values in prop::collection::vec(0_i64..10, 0..12),
            value in 0_i64..10,
        ) {
            let mut store = store_of(&values);
            let expected: Vec<i64> = values.iter().copied().filter(|&v| v != value).collect();
            let removed = store.remove_by_value(value);

            prop_assert!(!store.contains(value));
            prop_assert_eq!(removed, values.len() - expected.len());
            prop_assert_eq!(store.values(), expected);
        }
    }
}
