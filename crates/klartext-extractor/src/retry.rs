//! Retry policy for external service calls

use crate::error::ExtractError;
use std::time::Duration;

/// Attempt budget and backoff schedule for a retried external call
///
/// Connectivity failures back off linearly with the 1-based attempt index
/// (`base_delay`, then `2 * base_delay`, ...); every other retryable
/// failure waits the fixed base delay. No delay follows the final attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,

    /// Base delay between attempts
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay to wait after a failed attempt, keyed to the 1-based attempt index
    pub fn delay_for(&self, attempt: u32, error: &ExtractError) -> Duration {
        if error.is_connectivity() {
            self.base_delay * attempt
        } else {
            self.base_delay
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2))
    }
}
