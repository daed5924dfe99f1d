//! Envelope parser combining the field rules into one scored result.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::pattern::ExtractedFields;

use super::normalize_text;
use super::rules::{
    CompanyExtractor, DifficultyExtractor, FabricExtractor, FieldExtractor,
    PatternNameExtractor, PatternNumberExtractor, SizeRangeExtractor,
};

/// Score for any text that survived normalization.
pub const BASE_CONFIDENCE: f32 = 0.3;

const COMPANY_WEIGHT: f32 = 0.20;
const PATTERN_NUMBER_WEIGHT: f32 = 0.20;
const PATTERN_NAME_WEIGHT: f32 = 0.15;
const SIZE_RANGE_WEIGHT: f32 = 0.10;
const FABRIC_TYPE_WEIGHT: f32 = 0.05;
const DIFFICULTY_WEIGHT: f32 = 0.05;

/// Length bonuses: (text longer than, bonus).
const LENGTH_BONUSES: [(usize, f32); 2] = [(50, 0.05), (100, 0.05)];

/// Result of envelope text extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whitespace-normalized recognized text.
    pub text: String,
    /// Extraction confidence (0.0 - 1.0).
    pub confidence: f32,
    /// Extracted field candidates.
    pub fields: ExtractedFields,
}

/// Trait for envelope text parsing.
///
/// Parsing is total: any input, including an empty string, yields a result.
pub trait PatternParser {
    /// Parse recognized envelope text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based envelope parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeParser;

impl EnvelopeParser {
    /// Create a new envelope parser.
    pub fn new() -> Self {
        Self
    }

    fn extract_fields(&self, text: &str) -> ExtractedFields {
        let company = CompanyExtractor::new().extract(text);
        let pattern_name = PatternNameExtractor::new()
            .with_company(company.as_deref())
            .extract(text);

        ExtractedFields {
            pattern_number: PatternNumberExtractor::new().extract(text),
            pattern_name,
            size_range: SizeRangeExtractor::new().extract(text),
            fabric_type: FabricExtractor::new().extract(text),
            difficulty: DifficultyExtractor::new().extract(text),
            company,
        }
    }
}

impl PatternParser for EnvelopeParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        info!("Parsing envelope from {} characters of text", text.len());

        let text = normalize_text(text);
        let fields = self.extract_fields(&text);

        debug!(
            company = ?fields.company,
            pattern_number = ?fields.pattern_number,
            pattern_name = ?fields.pattern_name,
            size_range = ?fields.size_range,
            fabric_type = ?fields.fabric_type,
            difficulty = ?fields.difficulty,
            "Extracted envelope fields"
        );

        let confidence = score_confidence(&fields, text.chars().count());
        debug!(
            "Extracted {} of 6 fields with confidence {:.2}",
            fields.found_count(),
            confidence
        );

        ExtractionResult {
            text,
            confidence,
            fields,
        }
    }
}

/// Score how complete an extraction is.
///
/// Starts at [`BASE_CONFIDENCE`], adds a fixed weight per found field and a
/// bonus for longer texts, and never exceeds 1.0.
pub fn score_confidence(fields: &ExtractedFields, text_len: usize) -> f32 {
    let weights = [
        (fields.company.is_some(), COMPANY_WEIGHT),
        (fields.pattern_number.is_some(), PATTERN_NUMBER_WEIGHT),
        (fields.pattern_name.is_some(), PATTERN_NAME_WEIGHT),
        (fields.size_range.is_some(), SIZE_RANGE_WEIGHT),
        (fields.fabric_type.is_some(), FABRIC_TYPE_WEIGHT),
        (fields.difficulty.is_some(), DIFFICULTY_WEIGHT),
    ];

    let field_score: f32 = weights
        .iter()
        .filter(|(found, _)| *found)
        .map(|(_, weight)| weight)
        .sum();

    let length_bonus: f32 = LENGTH_BONUSES
        .iter()
        .filter(|(threshold, _)| text_len > *threshold)
        .map(|(_, bonus)| bonus)
        .sum();

    (BASE_CONFIDENCE + field_score + length_bonus).min(1.0)
}

/// Extract fields and confidence from raw recognized text.
pub fn extract(raw_text: &str) -> ExtractionResult {
    EnvelopeParser::new().parse(raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pattern::Difficulty;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "confidence {} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_parse_full_envelope() {
        let text = "Simplicity Pattern #8234 Misses Wrap Dress Size 6-14 Cotton Intermediate";
        let result = extract(text);
        let fields = &result.fields;

        assert_eq!(fields.company.as_deref(), Some("Simplicity"));
        assert_eq!(fields.pattern_number.as_deref(), Some("8234"));
        assert!(fields.size_range.as_deref().unwrap().contains("6-14"));
        assert!(fields.fabric_type.as_deref().unwrap().contains("Cotton"));
        assert_eq!(fields.difficulty, Some(Difficulty::Intermediate));

        let name = fields.pattern_name.as_deref().unwrap();
        assert!(!name.contains("Misses"));
        assert!(!name.contains("Simplicity"));

        // Every field plus the >50 length bonus, clamped
        assert_close(result.confidence, 1.0);
    }

    #[test]
    fn test_multiline_envelope() {
        let text = "KWIK SEW\nK3402\n\nMisses' Knit Tops\nSizes: XS S M L XL\nSuggested Fabrics:\n  Cotton jersey, interlock\n";
        let result = extract(text);

        assert_eq!(
            result.text,
            "KWIK SEW K3402 Misses' Knit Tops Sizes: XS S M L XL Suggested Fabrics: Cotton jersey, interlock"
        );
        assert_eq!(result.fields.company.as_deref(), Some("Kwik Sew"));
        assert_eq!(result.fields.pattern_number.as_deref(), Some("K3402"));
        assert_eq!(result.fields.pattern_name.as_deref(), Some("Knit Tops"));
        assert_eq!(result.fields.size_range.as_deref(), Some("XS"));
        // "Knit" in the name counts as a catalog fabric, pushing the label out
        assert_eq!(
            result.fields.fabric_type.as_deref(),
            Some("Cotton, Jersey, Knit")
        );
        assert_eq!(result.fields.difficulty, None);
    }

    #[test]
    fn test_empty_text() {
        for text in ["", "   \n\t  "] {
            let result = extract(text);
            assert_eq!(result.text, "");
            assert_eq!(result.fields, ExtractedFields::default());
            assert_eq!(result.confidence, BASE_CONFIDENCE);
        }
    }

    #[test]
    fn test_single_company() {
        let result = extract("Butterick");
        assert_eq!(
            result.fields,
            ExtractedFields {
                company: Some("Butterick".to_string()),
                ..Default::default()
            }
        );
        assert_close(result.confidence, 0.5);
    }

    #[test]
    fn test_length_bonus_thresholds() {
        assert_close(extract(&"x".repeat(50)).confidence, 0.3);
        assert_close(extract(&"x".repeat(51)).confidence, 0.35);
        assert_close(extract(&"x".repeat(100)).confidence, 0.35);
        assert_close(extract(&"x".repeat(101)).confidence, 0.4);
    }

    #[test]
    fn test_length_is_measured_after_normalization() {
        let padded = format!("  {}\n\n\n{}  ", "x".repeat(25), "x".repeat(24));
        let result = extract(&padded);
        assert_eq!(result.text.chars().count(), 50);
        assert_close(result.confidence, 0.3);
    }

    #[test]
    fn test_score_confidence_weights() {
        let fields = ExtractedFields {
            pattern_name: Some("Wrap Dress".to_string()),
            size_range: Some("6-14".to_string()),
            fabric_type: Some("Cotton".to_string()),
            ..Default::default()
        };
        assert_close(score_confidence(&fields, 10), 0.6);
        assert_close(score_confidence(&fields, 101), 0.7);
    }

    #[test]
    fn test_confidence_always_in_range() {
        let samples = [
            "",
            "x",
            "Butterick B6453 Misses Dress Sizes: 6 8 10 Linen Silk Wool Level 3",
            "Vogue V1234 Very Easy Vogue Design: Evening Gown Size XL Satin, Velvet, Chiffon Expert level 4 with plenty of extra descriptive text to push the length bonus over both thresholds",
            "§§§ ### 12 -- ::: \u{2014}\u{00a0}",
            "Fabrics: Fabrics: Fabrics: Fabrics:",
        ];

        for sample in samples {
            let result = extract(sample);
            assert!(
                (BASE_CONFIDENCE..=1.0).contains(&result.confidence),
                "{} out of range for {:?}",
                result.confidence,
                sample
            );
        }
    }

    #[test]
    fn test_parser_is_deterministic() {
        let text = "McCall's M7890 Women's Jumpsuit 14-22 Crepe Advanced";
        let parser = EnvelopeParser::new();
        assert_eq!(parser.parse(text), parser.parse(text));
    }
}
