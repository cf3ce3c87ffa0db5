//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction pipeline and
//! infrastructure. Implementations live in other crates.

/// Classification of a text-generation failure
///
/// The retry policy backs off differently for connectivity failures than
/// for everything else, so the error type at the service seam must say
/// which kind it is.
pub trait GenerationError: std::fmt::Display {
    /// Whether the failure is a transport/connectivity problem
    fn is_connectivity(&self) -> bool;
}

/// Trait for single-turn text-generation service calls
///
/// Implemented by the infrastructure layer (klartext-llm). The call is an
/// explicit suspension point: it blocks the pipeline for the full round
/// trip, and retry backoff happens at the call site, not inside the
/// implementation.
pub trait TextGenerator {
    /// Error type for generation operations
    type Error: GenerationError;

    /// Generate a completion for the given prompt
    #[allow(async_fn_in_trait)]
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
