//! Configuration for the extraction engine

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the generative extraction path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Total attempts per generative call, including the first
    pub max_attempts: u32,

    /// Base retry delay in seconds
    ///
    /// Connectivity failures wait `base_delay * attempt` before the next
    /// try; any other failure waits the base delay unscaled.
    pub base_delay_secs: u64,
}

impl ExtractorConfig {
    /// Build the retry policy described by this configuration
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.base_delay_secs))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 2,
        }
    }
}
