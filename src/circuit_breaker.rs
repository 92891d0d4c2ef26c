use failsafe::{
    backoff::{self, Exponential},
    failure_policy::{self, ConsecutiveFailures},
    Config, StateMachine,
};
use std::time::Duration;

/// Circuit breaker guarding calls to the generative model provider.
pub type ProviderBreaker = StateMachine<ConsecutiveFailures<Exponential>, ()>;

/// Consecutive failures that open the circuit.
pub const FAILURE_THRESHOLD: u32 = 5;

/// Creates the breaker used for model calls.
///
/// # Configuration
///
/// - **Failure threshold**: 5 consecutive failures trigger the OPEN state.
/// - **Backoff**: exponential, from 10s up to 60s, before a trial call is let through.
///
/// While OPEN, calls are rejected without touching the network and the
/// caller serves template emails instead. A rejected call is not retried.
pub fn create_provider_circuit_breaker() -> ProviderBreaker {
    let backoff_strategy = backoff::exponential(
        Duration::from_secs(10), // Initial delay
        Duration::from_secs(60), // Maximum delay
    );

    let failure_policy = failure_policy::consecutive_failures(FAILURE_THRESHOLD, backoff_strategy);

    Config::new().failure_policy(failure_policy).build()
}
