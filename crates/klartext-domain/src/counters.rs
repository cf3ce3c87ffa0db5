//! Counters collected over one batch run

/// Generative-call accounting for a batch run
///
/// Three independent counters: successful generative calls, generative
/// calls whose retry budget was exhausted, and fallback-path invocations.
/// Initialized at batch start, owned and updated only by the batch runner,
/// read once at batch end for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Generative calls that returned a usable result
    pub generative_calls: usize,

    /// Generative calls that failed after all retries
    pub generative_failures: usize,

    /// Invocations of the deterministic fallback builder
    pub fallbacks: usize,
}

impl RunCounters {
    /// Create new zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful generative call
    pub fn record_generative_success(&mut self) {
        self.generative_calls += 1;
    }

    /// Record a generative call that exhausted its retry budget
    pub fn record_generative_failure(&mut self) {
        self.generative_failures += 1;
    }

    /// Record a fallback-path invocation
    pub fn record_fallback(&mut self) {
        self.fallbacks += 1;
    }

    /// Generate a summary report of the run
    pub fn summary(&self) -> String {
        [
            format!("Total generative calls: {}", self.generative_calls),
            format!("Generative failures: {}", self.generative_failures),
            format!("Fallbacks to simple extraction: {}", self.fallbacks),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = RunCounters::new();
        assert_eq!(counters.generative_calls, 0);
        assert_eq!(counters.generative_failures, 0);
        assert_eq!(counters.fallbacks, 0);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut counters = RunCounters::new();
        counters.record_generative_success();
        counters.record_generative_success();
        counters.record_generative_failure();
        counters.record_fallback();

        assert_eq!(counters.generative_calls, 2);
        assert_eq!(counters.generative_failures, 1);
        assert_eq!(counters.fallbacks, 1);
    }

    #[test]
    fn test_summary() {
        let mut counters = RunCounters::new();
        counters.record_generative_success();
        counters.record_fallback();

        let summary = counters.summary();
        assert!(summary.contains("Total generative calls: 1"));
        assert!(summary.contains("Generative failures: 0"));
        assert!(summary.contains("Fallbacks to simple extraction: 1"));
    }
}
