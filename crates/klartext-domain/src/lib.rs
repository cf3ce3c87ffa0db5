//! klartext Domain Layer
//!
//! Core value objects and trait seams for the material-text extraction
//! pipeline. Everything here is created per row and never mutated after
//! being stored, with one exception: `RunCounters`, the single piece of
//! state that lives for a whole batch run.
//!
//! ## Key Concepts
//!
//! - **ProductInfo**: the structured result of extracting one description
//! - **MaterialType**: closed classification of the material domain
//! - **MaterialRecord**: one input row's outcome, success or failure
//! - **RunCounters**: generative-call accounting for a batch run
//! - **TextGenerator**: the seam to the external text-generation service

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod counters;
pub mod material_type;
pub mod product;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use counters::RunCounters;
pub use material_type::MaterialType;
pub use product::{ProductInfo, DESCRIPTION_LIMIT, UNIT_PIECE};
pub use record::{MaterialRecord, ERROR_MARKER};
pub use traits::{GenerationError, TextGenerator};
