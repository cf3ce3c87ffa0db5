//! Material type module - closed classification of procurement materials

use serde::{Deserialize, Serialize};

/// Coarse material category of a procurement item
///
/// The classification is deliberately closed: anything the extractors cannot
/// place lands in `Other`, never in a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    /// Filtration parts (water filters, filter cartridges)
    Filter,

    /// Electrical components (contactors, relays, anything rated in V/kW)
    Electrical,

    /// Mechanical parts (bearings, shafts, rings, bushings)
    Mechanical,

    /// Seals and gaskets
    Seal,

    /// Default/unknown category
    Other,
}

impl MaterialType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Filter => "filter",
            MaterialType::Electrical => "electrical",
            MaterialType::Mechanical => "mechanical",
            MaterialType::Seal => "seal",
            MaterialType::Other => "other",
        }
    }

    /// Parse a material type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "filter" => Some(MaterialType::Filter),
            "electrical" => Some(MaterialType::Electrical),
            "mechanical" => Some(MaterialType::Mechanical),
            "seal" => Some(MaterialType::Seal),
            "other" => Some(MaterialType::Other),
            _ => None,
        }
    }
}

impl Default for MaterialType {
    fn default() -> Self {
        MaterialType::Other
    }
}

impl std::str::FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid material type: {}", s))
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
