//! Product module - the structured result of extracting one description

use crate::material_type::MaterialType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum length of a normalized description, in characters
///
/// The limit comes from the ERP short-text field. Lengths are counted in
/// characters, not bytes — the source texts are German and carry umlauts.
pub const DESCRIPTION_LIMIT: usize = 40;

/// Unit of measure for this material domain ("ST" = piece)
pub const UNIT_PIECE: &str = "ST";

/// Structured product information extracted from one material description
///
/// Value object: built once by an extractor, never mutated afterwards.
/// `short_description` holds the ≤ 40 character invariant at every
/// construction site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Main product name, with a leading "für " stripped where present
    pub product_name: String,

    /// Distinguishing fragments in source order
    pub characteristics: Vec<String>,

    /// Closed material classification
    pub material_type: MaterialType,

    /// Unit of measure, fixed to [`UNIT_PIECE`] in this domain
    pub unit_of_measure: String,

    /// Attribute name → value pairs, populated only by the generative path
    pub categorization: BTreeMap<String, String>,

    /// Bounded-length description, at most [`DESCRIPTION_LIMIT`] characters
    pub short_description: String,
}

impl Default for ProductInfo {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            characteristics: Vec::new(),
            material_type: MaterialType::Other,
            unit_of_measure: UNIT_PIECE.to_string(),
            categorization: BTreeMap::new(),
            short_description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_piece_unit() {
        let info = ProductInfo::default();
        assert_eq!(info.unit_of_measure, "ST");
        assert_eq!(info.material_type, MaterialType::Other);
        assert!(info.characteristics.is_empty());
        assert!(info.categorization.is_empty());
    }

    #[test]
    fn test_serialization_field_names() {
        let info = ProductInfo {
            product_name: "Siemens Schütz".to_string(),
            short_description: "Siemens Schütz 230V".to_string(),
            material_type: MaterialType::Electrical,
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["product_name"], "Siemens Schütz");
        assert_eq!(json["material_type"], "electrical");
        assert_eq!(json["unit_of_measure"], "ST");
        assert!(json["categorization"].as_object().unwrap().is_empty());
    }
}
