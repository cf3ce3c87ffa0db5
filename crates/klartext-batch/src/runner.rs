//! Per-row batch loop around the extraction orchestrator

use crate::error::BatchError;
use crate::progress::ProgressSink;
use crate::table::MaterialRow;
use klartext_domain::{MaterialRecord, RunCounters, TextGenerator};
use klartext_extractor::{final_description, normalize, Orchestrator, ResolveOutcome};
use tracing::{info, warn};

/// Everything a batch run produces
#[derive(Debug)]
pub struct BatchReport {
    /// One record per processed input row, in input order
    pub records: Vec<MaterialRecord>,

    /// Generative-call accounting for the whole run
    pub counters: RunCounters,
}

/// Iterates material rows and isolates their failures
///
/// Each row is normalized, resolved, and appended; a row that cannot be
/// read becomes an error record with the [`ERROR`](klartext_domain::ERROR_MARKER)
/// description and processing continues. Rows whose description normalizes
/// to nothing are skipped without a record. The runner is the only place
/// that mutates [`RunCounters`].
pub struct BatchRunner<G: TextGenerator> {
    orchestrator: Orchestrator<G>,
}

impl<G: TextGenerator> BatchRunner<G> {
    /// Create a new batch runner
    pub fn new(orchestrator: Orchestrator<G>) -> Self {
        Self { orchestrator }
    }

    /// Process all rows in order and return the records plus counters
    pub async fn run<I, P>(&self, rows: I, progress: &mut P) -> BatchReport
    where
        I: IntoIterator<Item = Result<MaterialRow, BatchError>>,
        P: ProgressSink,
    {
        let mut records = Vec::new();
        let mut counters = RunCounters::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(error) => {
                    warn!(index, %error, "row could not be read");
                    let record =
                        MaterialRecord::failed(String::new(), String::new(), error.to_string());
                    progress.row_processed(index, &record);
                    records.push(record);
                    continue;
                }
            };

            let cleaned_text = normalize(&row.description);
            if cleaned_text.is_empty() {
                warn!(index, "empty description, skipping row");
                progress.row_skipped(index);
                continue;
            }

            let resolution = self.orchestrator.resolve(&cleaned_text).await;
            match resolution.outcome {
                ResolveOutcome::Heuristic => {}
                ResolveOutcome::Generative => counters.record_generative_success(),
                ResolveOutcome::FallbackAfterService => {
                    counters.record_generative_failure();
                    counters.record_fallback();
                }
            }

            let record = MaterialRecord {
                original_text: row.description,
                cleaned_text,
                final_description: final_description(&resolution.info),
                structured_info: Some(resolution.info),
                error: None,
            };
            progress.row_processed(index, &record);
            records.push(record);
        }

        info!(rows = records.len(), "batch complete");
        BatchReport { records, counters }
    }
}
