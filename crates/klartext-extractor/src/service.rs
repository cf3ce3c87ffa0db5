//! Generative extraction via the external text service

use crate::error::ExtractError;
use crate::parser::parse_product_response;
use crate::prompt::build_extraction_prompt;
use crate::retry::RetryPolicy;
use klartext_domain::{GenerationError, ProductInfo, TextGenerator};
use tracing::{debug, warn};

/// Extracts product information through the text-generation service
///
/// One prompt per description, one generator call per attempt, retried
/// under the injected [`RetryPolicy`]. A success short-circuits the
/// remaining budget; exhaustion yields [`ExtractError::AllAttemptsFailed`].
pub struct ServiceExtractor<G: TextGenerator> {
    generator: G,
    policy: RetryPolicy,
}

impl<G: TextGenerator> ServiceExtractor<G> {
    /// Create a new service extractor
    pub fn new(generator: G, policy: RetryPolicy) -> Self {
        Self { generator, policy }
    }

    /// Extract product information for one normalized description
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::AllAttemptsFailed`] once the attempt budget
    /// is spent; the error carries the last attempt's failure.
    pub async fn extract(&self, text: &str) -> Result<ProductInfo, ExtractError> {
        let prompt = build_extraction_prompt(text);
        let max_attempts = self.policy.max_attempts;
        let mut last_error: Option<ExtractError> = None;

        for attempt in 1..=max_attempts {
            debug!(attempt, max_attempts, "calling text service");

            match self.attempt(&prompt).await {
                Ok(info) => {
                    debug!(attempt, product_name = %info.product_name, "generative extraction succeeded");
                    return Ok(info);
                }
                Err(error) => {
                    warn!(attempt, %error, "generation attempt failed");
                    if attempt < max_attempts {
                        tokio::time::sleep(self.policy.delay_for(attempt, &error)).await;
                    }
                    last_error = Some(error);
                }
            }
        }

        Err(ExtractError::AllAttemptsFailed {
            attempts: max_attempts,
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempts made".to_string()),
        })
    }

    async fn attempt(&self, prompt: &str) -> Result<ProductInfo, ExtractError> {
        let content = self.generator.generate(prompt).await.map_err(|e| {
            if e.is_connectivity() {
                ExtractError::Connection(e.to_string())
            } else {
                ExtractError::Generation(e.to_string())
            }
        })?;

        if content.trim().is_empty() {
            return Err(ExtractError::EmptyResponse);
        }

        parse_product_response(&content)
    }
}
