//! Error types for batch processing

use thiserror::Error;

/// Errors from the tabular store or an individual row
///
/// Whole-table failures (cannot open, cannot write) are fatal to the run;
/// a per-row failure is caught at the row boundary and turned into an
/// error record.
#[derive(Debug, Error)]
pub enum BatchError {
    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
