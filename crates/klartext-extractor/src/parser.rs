//! Parse service output into a validated ProductInfo

use crate::error::ExtractError;
use crate::heuristic::strip_purpose_prefix;
use crate::synthesize::{char_len, synthesize};
use klartext_domain::{MaterialType, ProductInfo, DESCRIPTION_LIMIT, UNIT_PIECE};
use serde_json::Value;
use std::collections::BTreeMap;

/// Parse a raw service response into a [`ProductInfo`]
///
/// The response may wrap the JSON object in prose or markdown; the span
/// between the first `{` and the last `}` is what gets parsed. Fields are
/// then extracted and normalized explicitly: unknown material types become
/// `Other`, the unit of measure is forced to `"ST"`, scalar non-string
/// values are stringified, and an absent or over-long short description is
/// rebuilt with the shared synthesizer.
pub fn parse_product_response(response: &str) -> Result<ProductInfo, ExtractError> {
    let start = response.find('{').ok_or(ExtractError::NoJsonFound)?;
    let end = response.rfind('}').ok_or(ExtractError::NoJsonFound)?;
    if end < start {
        return Err(ExtractError::NoJsonFound);
    }

    let json: Value = serde_json::from_str(&response[start..=end])
        .map_err(|e| ExtractError::MalformedJson(e.to_string()))?;

    product_from_json(&json)
}

fn product_from_json(json: &Value) -> Result<ProductInfo, ExtractError> {
    let obj = json
        .as_object()
        .ok_or_else(|| ExtractError::InvalidProduct("not a JSON object".to_string()))?;

    let name_raw = obj
        .get("product_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if name_raw.is_empty() {
        return Err(ExtractError::InvalidProduct(
            "product_name missing or empty".to_string(),
        ));
    }
    let product_name = strip_purpose_prefix(name_raw).to_string();
    if product_name.is_empty() {
        return Err(ExtractError::InvalidProduct(
            "product_name empty after prefix strip".to_string(),
        ));
    }

    let characteristics: Vec<String> = obj
        .get("characteristics")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(value_as_text).collect())
        .unwrap_or_default();

    let material_type = obj
        .get("material_type")
        .and_then(Value::as_str)
        .and_then(MaterialType::parse)
        .unwrap_or(MaterialType::Other);

    let categorization: BTreeMap<String, String> = obj
        .get("categorization")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(key, value)| value_as_text(value).map(|text| (key.clone(), text)))
                .collect()
        })
        .unwrap_or_default();

    let short_raw = obj
        .get("short_description")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    let short_description = if !short_raw.is_empty() && char_len(short_raw) <= DESCRIPTION_LIMIT {
        short_raw.to_string()
    } else {
        synthesize(&product_name, &characteristics)
    };

    Ok(ProductInfo {
        product_name,
        characteristics,
        material_type,
        unit_of_measure: UNIT_PIECE.to_string(),
        categorization,
        short_description,
    })
}

/// Coerce a scalar JSON value to text; arrays, objects and null are dropped
fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
