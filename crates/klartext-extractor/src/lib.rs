//! klartext Extractor
//!
//! Turns one raw material description into a structured [`ProductInfo`]
//! record with a bounded-length description.
//!
//! # Architecture
//!
//! ```text
//! raw text → normalize → Orchestrator ─→ heuristic extractor
//!                             │              │ (too thin?)
//!                             │              ▼
//!                             ├─→ ServiceExtractor (prompt → Ollama → parse, retried)
//!                             │              │ (exhausted?)
//!                             └─→ fallback builder
//! ```
//!
//! The orchestrator always runs the deterministic heuristic first and only
//! escalates to the text-generation service when the result looks too thin
//! (no characteristics, or a single-token name). A successful generative
//! result replaces the heuristic one entirely; an exhausted one drops to a
//! deterministic fallback. `resolve` never fails.
//!
//! # Example
//!
//! ```
//! use klartext_extractor::{normalize, Orchestrator, ResolveOutcome, RetryPolicy, ServiceExtractor};
//! use klartext_llm::MockGenerator;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let generator = MockGenerator::new("{}");
//! let service = ServiceExtractor::new(generator, RetryPolicy::new(3, Duration::ZERO));
//! let orchestrator = Orchestrator::new(service);
//!
//! let cleaned = normalize("Siemens Schütz // Spulensp. 230V, 50HZ/AC");
//! let resolution = orchestrator.resolve(&cleaned).await;
//!
//! assert_eq!(resolution.outcome, ResolveOutcome::Heuristic);
//! assert_eq!(resolution.info.product_name, "Siemens Schütz");
//! # });
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod heuristic;
mod normalize;
mod orchestrator;
mod parser;
mod prompt;
mod retry;
mod service;
mod synthesize;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use heuristic::{extract_heuristic, fallback_info};
pub use normalize::normalize;
pub use orchestrator::{Orchestrator, Resolution, ResolveOutcome};
pub use parser::parse_product_response;
pub use prompt::build_extraction_prompt;
pub use retry::RetryPolicy;
pub use service::ServiceExtractor;
pub use synthesize::{final_description, synthesize};
