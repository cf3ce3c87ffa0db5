//! Error types for the extraction engine

use thiserror::Error;

/// Errors that can occur on the generative extraction path
///
/// Everything here is recoverable at some enclosing scope: individual
/// attempt failures are retried, [`ExtractError::AllAttemptsFailed`] makes
/// the orchestrator drop to the fallback builder, and nothing propagates
/// past the batch loop.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Transport failure reaching the text service (retried with linear backoff)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Service-side failure that is not a connectivity problem
    #[error("Generation error: {0}")]
    Generation(String),

    /// The service returned no message content
    #[error("Empty response from text service")]
    EmptyResponse,

    /// The response contains no JSON object span
    #[error("No JSON found in response")]
    NoJsonFound,

    /// The outermost brace span does not parse as JSON
    #[error("Malformed JSON in response: {0}")]
    MalformedJson(String),

    /// The parsed object is missing required product fields
    #[error("Invalid product info: {0}")]
    InvalidProduct(String),

    /// The retry budget is exhausted; terminal for the generative path
    #[error("All {attempts} generation attempts failed: {last}")]
    AllAttemptsFailed {
        /// How many attempts were made
        attempts: u32,
        /// The last attempt's error
        last: String,
    },
}

impl ExtractError {
    /// Whether this failure is a connectivity problem
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ExtractError::Connection(_))
    }
}
