//! Rule-based structured-info extraction from normalized text

use crate::synthesize::synthesize;
use klartext_domain::{MaterialType, ProductInfo};

/// Fixed, ordered keyword table for material classification
///
/// The first entry with any keyword contained in the lowercased text wins;
/// no match leaves [`MaterialType::Other`]. Order is part of the contract
/// ("Leistung" appears in electrical listings that also mention bearings).
const TYPE_KEYWORDS: &[(MaterialType, &[&str])] = &[
    (MaterialType::Filter, &["filter", "wasserfilter"]),
    (
        MaterialType::Electrical,
        &["schütz", "relais", "spannung", "leistung"],
    ),
    (
        MaterialType::Mechanical,
        &["lager", "welle", "ring", "buchse"],
    ),
    (MaterialType::Seal, &["dicht", "dichtung"]),
];

/// Extract structured product information without the text service
///
/// Expects normalized text. Splits on the pipe separator: the first segment
/// becomes the name (a leading "für " stripped), the rest become
/// characteristics in source order. Texts with no usable segments delegate
/// to [`fallback_info`].
pub fn extract_heuristic(text: &str) -> ProductInfo {
    let segments = split_segments(text);

    let Some((first, rest)) = segments.split_first() else {
        return fallback_info(text);
    };

    let product_name = strip_purpose_prefix(first).to_string();
    let characteristics: Vec<String> = rest.iter().map(|s| s.to_string()).collect();
    let short_description = synthesize(&product_name, &characteristics);

    ProductInfo {
        product_name,
        characteristics,
        material_type: classify(text),
        short_description,
        ..Default::default()
    }
}

/// Last-resort deterministic record builder
///
/// Same segment handling as the heuristic path but with the classification
/// fixed to `Other`. Used by the orchestrator when the generative path is
/// exhausted, and directly for texts with no usable segments.
pub fn fallback_info(text: &str) -> ProductInfo {
    let segments = split_segments(text);

    let Some((first, rest)) = segments.split_first() else {
        return ProductInfo::default();
    };

    let product_name = strip_purpose_prefix(first).to_string();
    let characteristics: Vec<String> = rest.iter().map(|s| s.to_string()).collect();
    let short_description = synthesize(&product_name, &characteristics);

    ProductInfo {
        product_name,
        characteristics,
        material_type: MaterialType::Other,
        short_description,
        ..Default::default()
    }
}

fn split_segments(text: &str) -> Vec<&str> {
    text.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip a leading "für " (case-insensitive) from a product name
pub(crate) fn strip_purpose_prefix(name: &str) -> &str {
    let mut indices = name.char_indices();
    for expected in ['f', 'ü', 'r', ' '] {
        match indices.next() {
            Some((_, c)) if c.to_lowercase().eq(expected.to_lowercase()) => {}
            _ => return name,
        }
    }

    indices
        .next()
        .map(|(i, _)| name[i..].trim())
        .unwrap_or("")
}

fn classify(text: &str) -> MaterialType {
    let lowered = text.to_lowercase();
    for (material_type, keywords) in TYPE_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *material_type;
        }
    }
    MaterialType::Other
}
