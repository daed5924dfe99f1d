//! Pattern envelope field extraction.

mod parser;
pub mod rules;

pub use parser::{
    extract, score_confidence, EnvelopeParser, ExtractionResult, PatternParser, BASE_CONFIDENCE,
};

use rules::patterns::WHITESPACE;

/// Collapse every whitespace run to a single space and trim the ends.
///
/// All field rules run on text normalized this way.
pub fn normalize_text(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(
            normalize_text("  SIMPLICITY\n\n8234\t Misses\r\nDress  "),
            "SIMPLICITY 8234 Misses Dress"
        );
        assert_eq!(normalize_text(" \n\t "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "plain",
            "  a \t b\n\nc  ",
            "Kwik\u{00a0}Sew\u{2003}K3402",
            "line one\r\nline two\n",
        ];

        for sample in samples {
            let once = normalize_text(sample);
            assert_eq!(normalize_text(&once), once);
        }
    }
}
