//! Difficulty extraction.

use crate::models::pattern::Difficulty;

use super::patterns::DIFFICULTY;
use super::FieldExtractor;

/// Difficulty field extractor.
///
/// Only the first difficulty mention is normalized. A mention that names no
/// known level, such as "Skill Level: Moderate", leaves the field absent even
/// if a later mention would have normalized.
pub struct DifficultyExtractor;

impl DifficultyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DifficultyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DifficultyExtractor {
    type Output = Difficulty;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DIFFICULTY
            .find(text)
            .and_then(|m| Difficulty::from_text(m.as_str()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DIFFICULTY
            .find_iter(text)
            .filter_map(|m| Difficulty::from_text(m.as_str()))
            .collect()
    }
}

/// Extract the difficulty from normalized text.
pub fn extract_difficulty(text: &str) -> Option<Difficulty> {
    DifficultyExtractor::new().extract(text)
}
