//! Pattern number extraction.

use super::patterns::{PATTERN_NUMBER_LABEL, PATTERN_NUMBER_SHAPES};
use super::{char_len, FieldExtractor};

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 6;

/// Pattern number field extractor.
///
/// Shapes are tried in priority order and the first shape with any match
/// decides. Only its first match is considered for [`FieldExtractor::extract`]:
/// if that match does not clean up to a valid number, later matches and later
/// shapes are not consulted.
pub struct PatternNumberExtractor;

impl PatternNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    fn winning_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        PATTERN_NUMBER_SHAPES
            .iter()
            .map(|shape| shape.find_iter(text).map(|m| m.as_str()).collect::<Vec<_>>())
            .find(|matches| !matches.is_empty())
            .unwrap_or_default()
    }
}

impl Default for PatternNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PatternNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.winning_matches(text).first().and_then(|m| clean_number(m))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.winning_matches(text)
            .into_iter()
            .filter_map(clean_number)
            .collect()
    }
}

/// Strip a "Pattern #"/"No." label, check the length, and uppercase.
fn clean_number(raw: &str) -> Option<String> {
    let number = PATTERN_NUMBER_LABEL.replace(raw.trim(), "");
    let number = number.trim();

    if (MIN_LEN..=MAX_LEN).contains(&char_len(number)) {
        Some(number.to_uppercase())
    } else {
        None
    }
}

/// Extract the pattern number from normalized text.
pub fn extract_pattern_number(text: &str) -> Option<String> {
    PatternNumberExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_lettered_numbers() {
        assert_eq!(extract_pattern_number("Simplicity Pattern #8234"), Some("8234".to_string()));
        assert_eq!(extract_pattern_number("butterick b6453 dress"), Some("B6453".to_string()));
        assert_eq!(extract_pattern_number("McCall's M7890"), Some("M7890".to_string()));
    }

    #[test]
    fn test_short_numbers_use_second_shape() {
        assert_eq!(extract_pattern_number("Burda 118 blouse"), Some("118".to_string()));
        assert_eq!(extract_pattern_number("Style 1234A top"), Some("1234A".to_string()));
    }

    #[test]
    fn test_labeled_number() {
        assert_eq!(extract_pattern_number("No. K34"), Some("K34".to_string()));
        assert_eq!(extract_pattern_number("Pattern # ab12"), Some("AB12".to_string()));
    }

    #[test]
    fn test_labeled_number_too_long_is_dropped() {
        assert_eq!(extract_pattern_number("No. ABCDEFGH"), None);
    }

    #[test]
    fn test_first_shape_wins_over_text_order() {
        // "118" comes first in the text but only the 4-5 digit shape is consulted
        let extractor = PatternNumberExtractor::new();
        assert_eq!(extractor.extract("118 and 5523"), Some("5523".to_string()));
        assert_eq!(extractor.extract_all("S1234 then 5678"), vec!["S1234", "5678"]);
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extract_pattern_number(""), None);
        assert_eq!(extract_pattern_number("Sizes 6-14"), None);
    }
}
