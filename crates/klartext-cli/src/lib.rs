//! klartext CLI - batch entry point for material-text cleanup.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Settings;
pub use error::{CliError, Result};
pub use output::{ConsoleProgress, Formatter};
