//! Console output formatting for the CLI.

use colored::*;
use klartext_batch::ProgressSink;
use klartext_domain::{MaterialRecord, RunCounters};
use std::time::Duration;

const BANNER_WIDTH: usize = 80;

/// Console formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format one processed row as a banner block.
    pub fn row_block(&self, index: usize, total: usize, record: &MaterialRecord) -> String {
        let mut lines = vec![
            "=".repeat(BANNER_WIDTH),
            format!("Entry {}/{}", index + 1, total),
            "-".repeat(BANNER_WIDTH),
            format!("Original: {}", record.original_text),
        ];

        if let Some(error) = &record.error {
            lines.push(self.colorize(
                &format!("Processed: {}", record.final_description),
                "red",
            ));
            lines.push(self.colorize(&format!("Error: {}", error), "red"));
        } else {
            lines.push(format!(
                "Processed: {}",
                self.colorize(&record.final_description, "green")
            ));
            if let Some(info) = &record.structured_info {
                let json = serde_json::to_string_pretty(info)
                    .unwrap_or_else(|_| "<unserializable>".to_string());
                lines.push(format!("Structured Info: {}", json));
            }
        }

        lines.push("=".repeat(BANNER_WIDTH));
        lines.join("\n")
    }

    /// Format the end-of-run summary.
    pub fn summary(&self, counters: &RunCounters, rows: usize, elapsed: Duration) -> String {
        let header = format!("Processed {} rows in {:.2}s", rows, elapsed.as_secs_f64());
        format!("{}\n{}", self.colorize(&header, "cyan"), counters.summary())
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Progress sink that prints each row's banner block to stdout.
pub struct ConsoleProgress {
    formatter: Formatter,
    total: usize,
    quiet: bool,
}

impl ConsoleProgress {
    /// Create a new console progress sink.
    pub fn new(formatter: Formatter, total: usize, quiet: bool) -> Self {
        Self {
            formatter,
            total,
            quiet,
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn row_processed(&mut self, index: usize, record: &MaterialRecord) {
        if !self.quiet {
            println!("\n{}\n", self.formatter.row_block(index, self.total, record));
        }
    }
}
