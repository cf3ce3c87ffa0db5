//! Ollama Generator Implementation
//!
//! Single-turn chat integration with a local Ollama instance. The client
//! performs exactly one request per `generate` call; attempt budgeting and
//! backoff live in the extraction layer's retry policy.
//!
//! # Examples
//!
//! ```no_run
//! use klartext_llm::OllamaGenerator;
//!
//! let generator = OllamaGenerator::new("http://localhost:11434", "gemma3:latest");
//! // generator.generate(prompt).await yields the raw message content
//! ```

use crate::GeneratorError;
use klartext_domain::TextGenerator;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for a single chat round trip (seconds)
///
/// Generation over a long prompt on local hardware is slow; a hung call is
/// only ever cut short by this transport timeout, never by the retry policy.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Ollama chat API client for local text generation
pub struct OllamaGenerator {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for the Ollama chat API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// One chat turn
#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the Ollama chat API
#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ChatMessage>,
}

impl OllamaGenerator {
    /// Create a new Ollama generator
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: model to use (e.g., "gemma3:latest")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama generator with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
        }
    }

    /// Create a generator against the default local endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Model identifier this generator sends with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one single-turn chat request and return the raw message content
    ///
    /// Returns an empty string when the service answers without a message;
    /// the extraction layer treats that as an empty-response failure.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the service is unreachable or the transport times out
    /// - the model is not available (HTTP 404)
    /// - the response body cannot be decoded
    pub async fn chat(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = format!("{}/api/chat", self.endpoint);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeneratorError::Connection(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GeneratorError::ModelNotAvailable(self.model.clone()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeneratorError::Connection(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(chat_response
            .message
            .map(|m| m.content)
            .unwrap_or_default())
    }
}

impl TextGenerator for OllamaGenerator {
    type Error = GeneratorError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.chat(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_creation() {
        let generator = OllamaGenerator::new("http://localhost:11434", "gemma3:latest");
        assert_eq!(generator.endpoint, "http://localhost:11434");
        assert_eq!(generator.model(), "gemma3:latest");
    }

    #[test]
    fn test_default_endpoint() {
        let generator = OllamaGenerator::default_endpoint("mistral");
        assert_eq!(generator.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(generator.model(), "mistral");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        // Nothing listens on this port; the request fails at the transport
        let generator =
            OllamaGenerator::with_timeout("http://127.0.0.1:9", "gemma3:latest", Duration::from_secs(1));

        let result = generator.chat("test").await;
        match result {
            Err(GeneratorError::Connection(_)) => {}
            other => panic!("Expected Connection error, got {:?}", other.map(|_| ())),
        }
    }

    // Integration test (requires running Ollama)
    #[tokio::test]
    #[ignore]
    async fn test_chat_integration() {
        let generator = OllamaGenerator::default_endpoint("gemma3:latest");
        let result = generator.chat("Say 'hello' and nothing else").await;

        if let Ok(content) = result {
            assert!(!content.is_empty());
        }
    }
}
