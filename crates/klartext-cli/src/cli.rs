//! CLI command definitions and argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// klartext - clean up material master-data descriptions in batch.
#[derive(Debug, Parser)]
#[command(name = "klartext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file (column 4 holds the raw description)
    pub input: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "processed_materials.csv")]
    pub output: PathBuf,

    /// Text-generation service endpoint (e.g. http://localhost:11434)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model to use (e.g. gemma3:latest)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Settings file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress per-row progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::parse_from(["klartext", "materials.csv"]);
        assert_eq!(cli.input, PathBuf::from("materials.csv"));
        assert_eq!(cli.output, PathBuf::from("processed_materials.csv"));
        assert!(cli.endpoint.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "klartext",
            "in.csv",
            "--output",
            "out.csv",
            "--model",
            "mistral",
            "--endpoint",
            "http://ollama:11434",
            "--quiet",
        ]);
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert_eq!(cli.model.as_deref(), Some("mistral"));
        assert_eq!(cli.endpoint.as_deref(), Some("http://ollama:11434"));
        assert!(cli.quiet);
    }
}
