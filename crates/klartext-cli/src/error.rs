//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Only the table boundaries are fatal here: an unreadable input file or an
/// unwritable output file ends the run. Everything inside the batch loop is
/// handled per row.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Batch or table error
    #[error("Batch error: {0}")]
    Batch(#[from] klartext_batch::BatchError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
