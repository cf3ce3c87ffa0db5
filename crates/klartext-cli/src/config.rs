//! Settings file handling for the CLI.

use crate::cli::Cli;
use crate::error::Result;
use klartext_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Run settings, loadable from a TOML file.
///
/// Precedence: command-line flag > settings file > built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Text-generation service endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Total attempts per generative call
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base retry delay in seconds
    #[serde(default = "default_base_delay_secs")]
    pub base_delay_secs: u64,

    /// Transport timeout per service round trip, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Settings {
    /// Load settings from an optional TOML file path.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                Ok(toml::from_str(&contents)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(model) = &cli.model {
            self.model = model.clone();
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }

    /// The extraction engine configuration described by these settings.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            max_attempts: self.max_attempts,
            base_delay_secs: self.base_delay_secs,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_attempts: default_max_attempts(),
            base_delay_secs: default_base_delay_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            color: default_true(),
        }
    }
}

fn default_endpoint() -> String {
    klartext_llm::ollama::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    "gemma3:latest".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_secs() -> u64 {
    2
}

fn default_request_timeout_secs() -> u64 {
    klartext_llm::ollama::DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, "http://localhost:11434");
        assert_eq!(settings.model, "gemma3:latest");
        assert_eq!(settings.max_attempts, 3);
        assert_eq!(settings.base_delay_secs, 2);
        assert!(settings.color);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model = \"mistral\"").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.model, "mistral");
        assert_eq!(settings.endpoint, "http://localhost:11434");
        assert_eq!(settings.max_attempts, 3);
    }

    #[test]
    fn test_flag_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model = \"mistral\"").unwrap();
        file.flush().unwrap();

        let cli = Cli::parse_from(["klartext", "in.csv", "--model", "qwen3"]);
        let settings = Settings::load(Some(file.path())).unwrap().with_overrides(&cli);
        assert_eq!(settings.model, "qwen3");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/klartext.toml"))).is_err());
    }

    #[test]
    fn test_extractor_config_carries_retry_settings() {
        let settings = Settings {
            max_attempts: 5,
            base_delay_secs: 1,
            ..Default::default()
        };
        let config = settings.extractor_config();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.base_delay_secs, 1);
        assert!(config.validate().is_ok());
    }
}
