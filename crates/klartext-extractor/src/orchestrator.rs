//! Decision logic combining the heuristic and generative paths

use crate::heuristic::{extract_heuristic, fallback_info};
use crate::service::ServiceExtractor;
use klartext_domain::{ProductInfo, TextGenerator};
use tracing::{debug, warn};

/// Which path produced a resolution
///
/// Carried out of [`Orchestrator::resolve`] so the caller can account the
/// run counters exactly once per event, without the orchestrator holding
/// any mutable state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The heuristic result was sufficient; the service was not called
    Heuristic,

    /// Escalated and the generative call succeeded
    Generative,

    /// Escalated, the generative path exhausted its retries, fallback used
    FallbackAfterService,
}

/// Result of resolving one description
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The structured record
    pub info: ProductInfo,

    /// Which path produced it
    pub outcome: ResolveOutcome,
}

/// Decides between the heuristic result, the generative path, and the fallback
///
/// `resolve` never fails: the worst case is the deterministic fallback
/// record. A successful generative result replaces the heuristic result
/// entirely, it is not merged with it.
pub struct Orchestrator<G: TextGenerator> {
    service: ServiceExtractor<G>,
}

impl<G: TextGenerator> Orchestrator<G> {
    /// Create a new orchestrator around a service extractor
    pub fn new(service: ServiceExtractor<G>) -> Self {
        Self { service }
    }

    /// Resolve one normalized description to a structured record
    pub async fn resolve(&self, text: &str) -> Resolution {
        let heuristic = extract_heuristic(text);

        if !needs_escalation(&heuristic) {
            return Resolution {
                info: heuristic,
                outcome: ResolveOutcome::Heuristic,
            };
        }

        debug!(
            characteristics = heuristic.characteristics.len(),
            product_name = %heuristic.product_name,
            "heuristic result too thin, escalating to text service"
        );

        match self.service.extract(text).await {
            Ok(info) => Resolution {
                info,
                outcome: ResolveOutcome::Generative,
            },
            Err(error) => {
                warn!(%error, "generative extraction failed, using fallback");
                Resolution {
                    info: fallback_info(text),
                    outcome: ResolveOutcome::FallbackAfterService,
                }
            }
        }
    }
}

/// Escalation rule: no characteristics, or a single-token product name
fn needs_escalation(info: &ProductInfo) -> bool {
    info.characteristics.is_empty() || info.product_name.split_whitespace().count() == 1
}
