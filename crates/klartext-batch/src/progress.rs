//! Injected per-row progress events
//!
//! Progress reporting is a side channel, not part of the data contract.
//! The runner pushes events into an injected sink instead of printing, so
//! the engine stays testable without capturing global output.

use klartext_domain::MaterialRecord;

/// Receiver for per-row progress events during a batch run
pub trait ProgressSink {
    /// A row was processed (successfully or as a failure record)
    fn row_processed(&mut self, index: usize, record: &MaterialRecord) {
        let _ = (index, record);
    }

    /// A row was skipped because its description normalized to nothing
    fn row_skipped(&mut self, index: usize) {
        let _ = index;
    }
}

/// No-op sink for callers that do not report progress
impl ProgressSink for () {}
