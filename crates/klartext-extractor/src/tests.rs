//! End-to-end tests for the extraction engine

use crate::{
    final_description, normalize, Orchestrator, ResolveOutcome, RetryPolicy, ServiceExtractor,
};
use klartext_domain::MaterialType;
use klartext_llm::{GeneratorError, MockGenerator};
use std::time::Duration;

fn orchestrator(generator: MockGenerator) -> Orchestrator<MockGenerator> {
    Orchestrator::new(ServiceExtractor::new(
        generator,
        RetryPolicy::new(3, Duration::ZERO),
    ))
}

#[tokio::test]
async fn rich_heuristic_result_skips_the_service() {
    let generator = MockGenerator::new("{}");
    let orchestrator = orchestrator(generator.clone());

    let text = normalize("für APIC Wasserfilter FMA 9000 // Ref: 9000/CPF01/230/VH // Pos. 48");
    let resolution = orchestrator.resolve(&text).await;

    assert_eq!(resolution.outcome, ResolveOutcome::Heuristic);
    assert_eq!(resolution.info.product_name, "APIC Wasserfilter FMA 9000");
    assert_eq!(
        resolution.info.characteristics,
        vec!["Ref: 9000/CPF01/230/VH", "Pos. 48"]
    );
    assert_eq!(resolution.info.material_type, MaterialType::Filter);
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn single_token_name_escalates_and_takes_the_service_result() {
    let generator = MockGenerator::new(
        r#"{
            "product_name": "Kugellager 6204 2RS",
            "characteristics": ["beidseitig gedichtet"],
            "material_type": "mechanical",
            "categorization": {"Bauform": "Rillenkugellager"},
            "short_description": "Kugellager 6204 2RS"
        }"#,
    );
    let orchestrator = orchestrator(generator.clone());

    let resolution = orchestrator.resolve("Kugellager | 6204 | 2RS").await;

    assert_eq!(resolution.outcome, ResolveOutcome::Generative);
    // The generative result replaces the heuristic one entirely
    assert_eq!(resolution.info.product_name, "Kugellager 6204 2RS");
    assert_eq!(resolution.info.characteristics, vec!["beidseitig gedichtet"]);
    assert_eq!(resolution.info.categorization["Bauform"], "Rillenkugellager");
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn exhausted_service_drops_to_fallback() {
    let generator = MockGenerator::new("{}");
    for _ in 0..3 {
        generator.push_err(GeneratorError::Connection("refused".to_string()));
    }
    let orchestrator = orchestrator(generator.clone());

    let resolution = orchestrator.resolve("Schütz | 3RT1034").await;

    assert_eq!(resolution.outcome, ResolveOutcome::FallbackAfterService);
    assert_eq!(resolution.info.product_name, "Schütz");
    assert_eq!(resolution.info.characteristics, vec!["3RT1034"]);
    // Fallback never classifies, even when a keyword is present
    assert_eq!(resolution.info.material_type, MaterialType::Other);
    assert_eq!(resolution.info.short_description, "Schütz 3RT1034");
    assert_eq!(generator.call_count(), 3);
}

#[tokio::test]
async fn final_description_respects_the_limit_end_to_end() {
    let generator = MockGenerator::new("{}");
    let orchestrator = orchestrator(generator);

    let inputs = [
        "für APIC Wasserfilter FMA 9000 | Ref: 9000/CPF01/230/VH | Pos. 48",
        "Absperrklappe DN200 PN16 mit Elektroantrieb und Endschalter | Auf-Zu 230V AC",
        "Siemens Schütz | Spulensp. 230V, 50HZ/AC | Leistung 45,0 KW/400V",
    ];
    for input in inputs {
        let text = normalize(input);
        let resolution = orchestrator.resolve(&text).await;
        let description = final_description(&resolution.info);
        assert!(
            description.chars().count() <= 40,
            "description too long for {:?}",
            input
        );
        assert!(
            resolution.info.short_description.chars().count() <= 40,
            "short_description too long for {:?}",
            input
        );
    }
}

#[tokio::test]
async fn empty_service_answer_still_resolves() {
    // Whitespace-only answers burn the whole budget, then the fallback runs
    let generator = MockGenerator::new(" ");
    let orchestrator = orchestrator(generator.clone());

    let resolution = orchestrator.resolve("Dichtring").await;

    assert_eq!(resolution.outcome, ResolveOutcome::FallbackAfterService);
    assert_eq!(resolution.info.product_name, "Dichtring");
    assert_eq!(generator.call_count(), 3);
}
