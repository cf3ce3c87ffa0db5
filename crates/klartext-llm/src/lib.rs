//! klartext Text-Generation Layer
//!
//! Implementations of the `TextGenerator` trait from `klartext-domain`.
//!
//! # Providers
//!
//! - `MockGenerator`: deterministic, scripted responses for testing
//! - `OllamaGenerator`: local Ollama chat API integration
//!
//! Neither implementation retries: the extraction layer owns the retry
//! policy and calls the generator once per attempt.

#![warn(missing_docs)]

pub mod ollama;

use klartext_domain::{GenerationError, TextGenerator};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaGenerator;

/// Errors that can occur while talking to a text-generation service
#[derive(Error, Debug, Clone)]
pub enum GeneratorError {
    /// Network or transport failure reaching the service
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service does not know the requested model
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// The service answered with a body the client cannot decode
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic service error
    #[error("Generation error: {0}")]
    Other(String),
}

impl GenerationError for GeneratorError {
    /// Connectivity failures get linear backoff from the retry policy;
    /// everything else gets the fixed base delay.
    fn is_connectivity(&self) -> bool {
        matches!(self, GeneratorError::Connection(_))
    }
}

/// Mock generator with a scripted response sequence
///
/// Responses queued with [`push_ok`](MockGenerator::push_ok) and
/// [`push_err`](MockGenerator::push_err) are returned in order, one per
/// call; once the script runs dry every call returns the default response.
/// This shape exists because retry tests need ordered failure→success
/// sequences, not per-prompt lookups.
///
/// # Examples
///
/// ```
/// use klartext_llm::{GeneratorError, MockGenerator};
/// use klartext_domain::TextGenerator;
///
/// # tokio_test::block_on(async {
/// let generator = MockGenerator::new("{}");
/// generator.push_err(GeneratorError::Connection("refused".to_string()));
/// generator.push_ok("{\"product_name\": \"Lager\"}");
///
/// assert!(generator.generate("prompt").await.is_err());
/// assert!(generator.generate("prompt").await.unwrap().contains("Lager"));
/// assert_eq!(generator.generate("prompt").await.unwrap(), "{}");
/// assert_eq!(generator.call_count(), 3);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, GeneratorError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerator {
    /// Create a new MockGenerator with a default response for all calls
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            default_response: default_response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful response
    pub fn push_ok(&self, response: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue an error response
    pub fn push_err(&self, error: GeneratorError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl TextGenerator for MockGenerator {
    type Error = GeneratorError;

    async fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        match self.script.lock().unwrap().pop_front() {
            Some(scripted) => scripted,
            None => Ok(self.default_response.clone()),
        }
    }
}
