//! Metrics emitted by the Store.
//!
//! The Store records through the `metrics` facade. Nothing is exported unless
//! the application installs a recorder; without one every call is a no-op.
//!
//! # Example
//!
//! ```
//! use prime_time_runtime::metrics::register_metrics;
//!
//! // Attach descriptions so a recorder installed by the host can render help text
//! register_metrics();
//! ```

use metrics::{describe_counter, describe_histogram, Unit};

/// Total actions accepted by `Store::send`
pub const ACTIONS_TOTAL: &str = "store.actions.total";
/// Reducer execution time
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";
/// Effects executed, labelled by `type`
pub const EFFECTS_EXECUTED: &str = "store.effects.executed";
/// Shutdowns started
pub const SHUTDOWN_INITIATED: &str = "store.shutdown.initiated";
/// Shutdowns that drained every effect in time
pub const SHUTDOWN_COMPLETED: &str = "store.shutdown.completed";
/// Shutdowns that gave up waiting
pub const SHUTDOWN_TIMEOUT: &str = "store.shutdown.timeout";
/// Actions refused because the store was shutting down
pub const SHUTDOWN_REJECTED_ACTIONS: &str = "store.shutdown.rejected_actions";

/// Register all metric descriptions.
///
/// Safe to call more than once.
pub fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions sent to the store");
    describe_histogram!(
        REDUCER_DURATION,
        Unit::Seconds,
        "Time taken to run the reducer for one action"
    );
    describe_counter!(
        EFFECTS_EXECUTED,
        "Total number of effects executed, by effect type"
    );
    describe_counter!(SHUTDOWN_INITIATED, "Graceful shutdowns started");
    describe_counter!(SHUTDOWN_COMPLETED, "Graceful shutdowns that finished in time");
    describe_counter!(SHUTDOWN_TIMEOUT, "Graceful shutdowns that timed out");
    describe_counter!(
        SHUTDOWN_REJECTED_ACTIONS,
        "Actions rejected because the store was shutting down"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics_is_idempotent() {
        register_metrics();
        register_metrics();
    }

    #[test]
    fn test_metric_names_are_namespaced() {
        for name in [
            ACTIONS_TOTAL,
            REDUCER_DURATION,
            EFFECTS_EXECUTED,
            SHUTDOWN_INITIATED,
            SHUTDOWN_COMPLETED,
            SHUTDOWN_TIMEOUT,
            SHUTDOWN_REJECTED_ACTIONS,
        ] {
            assert!(name.starts_with("store."), "{name} is not namespaced");
        }
    }
}
