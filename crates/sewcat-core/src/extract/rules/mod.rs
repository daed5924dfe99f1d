//! Rule-based field extractors for pattern envelopes.

pub mod catalog;
pub mod company;
pub mod difficulty;
pub mod fabric;
pub mod name;
pub mod number;
pub mod patterns;
pub mod size;

pub use catalog::{COMPANIES, FABRICS};
pub use company::{extract_company, CompanyExtractor};
pub use difficulty::{extract_difficulty, DifficultyExtractor};
pub use fabric::{extract_fabric_type, FabricExtractor, MAX_FABRICS};
pub use name::{extract_pattern_name, PatternNameExtractor};
pub use number::{extract_pattern_number, PatternNumberExtractor};
pub use size::{extract_size_range, SizeRangeExtractor};

/// Trait for field extractors.
///
/// Extractors expect whitespace-normalized text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract every candidate for the field, in priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Length of a field value in characters.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
