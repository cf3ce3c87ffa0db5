//! Record module - one input row's outcome

use crate::product::ProductInfo;
use serde::{Deserialize, Serialize};

/// Description marker written for rows whose processing failed
pub const ERROR_MARKER: &str = "ERROR";

/// Outcome of processing one material row
///
/// Successful rows carry the extracted [`ProductInfo`] and a synthesized
/// description; failed rows carry the error message and the literal
/// [`ERROR_MARKER`] description. Either way the record is appended and the
/// batch moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Raw source text as read from the input table
    pub original_text: String,

    /// Text after normalization
    pub cleaned_text: String,

    /// Extraction result; absent when the row failed before extraction
    pub structured_info: Option<ProductInfo>,

    /// Final bounded-length description, or [`ERROR_MARKER`] on failure
    pub final_description: String,

    /// What went wrong, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MaterialRecord {
    /// Build a failure record from whatever text was available
    pub fn failed(original_text: String, cleaned_text: String, error: String) -> Self {
        Self {
            original_text,
            cleaned_text,
            structured_info: None,
            final_description: ERROR_MARKER.to_string(),
            error: Some(error),
        }
    }

    /// Whether this record represents a failed row
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_record() {
        let record = MaterialRecord::failed(
            "raw".to_string(),
            String::new(),
            "row exploded".to_string(),
        );
        assert!(record.is_failure());
        assert_eq!(record.final_description, ERROR_MARKER);
        assert!(record.structured_info.is_none());
    }

    #[test]
    fn test_error_field_omitted_on_success() {
        let record = MaterialRecord {
            original_text: "raw".to_string(),
            cleaned_text: "raw".to_string(),
            structured_info: Some(ProductInfo::default()),
            final_description: String::new(),
            error: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("error").is_none());
    }
}
