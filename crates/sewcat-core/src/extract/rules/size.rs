//! Size range extraction.

use super::patterns::{SIZE_LABEL, SIZE_SHAPES};
use super::{char_len, FieldExtractor};

const MAX_LEN: usize = 20;

/// Size range field extractor.
///
/// Tries letter codes, then numeric ranges, then a "Size(s):" label. The
/// first rule with a match decides.
pub struct SizeRangeExtractor;

impl SizeRangeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SizeRangeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SizeRangeExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        SIZE_SHAPES
            .iter()
            .find_map(|shape| shape.find(text))
            .and_then(|m| clean_size(m.as_str()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        SIZE_SHAPES
            .iter()
            .flat_map(|shape| shape.find_iter(text))
            .filter_map(|m| clean_size(m.as_str()))
            .collect()
    }
}

fn clean_size(raw: &str) -> Option<String> {
    let size = SIZE_LABEL.replace(raw.trim(), "");
    let size = size.trim();

    if (1..=MAX_LEN).contains(&char_len(size)) {
        Some(size.to_string())
    } else {
        None
    }
}

/// Extract the size range from normalized text.
pub fn extract_size_range(text: &str) -> Option<String> {
    SizeRangeExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_code() {
        assert_eq!(extract_size_range("Top XS-XL"), Some("XS".to_string()));
        assert_eq!(extract_size_range("One size M only"), Some("M".to_string()));
    }

    #[test]
    fn test_numeric_range() {
        assert_eq!(extract_size_range("Misses Size 6-14"), Some("6-14".to_string()));
        assert_eq!(extract_size_range("sizes 8 – 16"), Some("8 – 16".to_string()));
        assert_eq!(extract_size_range("Size 0 -16 dress"), Some("0 -16".to_string()));
    }

    #[test]
    fn test_labeled_sizes() {
        assert_eq!(extract_size_range("Sizes: 8 10 12 Cotton"), Some("8 10 12".to_string()));
        assert_eq!(extract_size_range("size: 4/6/8"), Some("4/6/8".to_string()));
    }

    #[test]
    fn test_labeled_lowercase_codes() {
        assert_eq!(extract_size_range("Sizes: xs-xl"), Some("xs-xl".to_string()));
        assert_eq!(extract_size_range("size: s/m/l Cotton"), Some("s/m/l".to_string()));
        // Unlabeled lowercase letters are ordinary words
        assert_eq!(extract_size_range("a top in s or m"), None);
    }

    #[test]
    fn test_labeled_run_too_long() {
        assert_eq!(extract_size_range("Sizes: 6, 8, 10, 12, 14, 16, 18, 20"), None);
    }

    #[test]
    fn test_letter_code_has_priority() {
        let extractor = SizeRangeExtractor::new();
        assert_eq!(extractor.extract("Sizes 6-14 and L"), Some("L".to_string()));
        assert_eq!(extractor.extract_all("Sizes 6-14 and L"), vec!["L", "6-14"]);
    }

    #[test]
    fn test_no_size() {
        assert_eq!(extract_size_range(""), None);
        assert_eq!(extract_size_range("McCall's 7890"), None);
    }
}
