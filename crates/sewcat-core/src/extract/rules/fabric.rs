//! Fabric type extraction.

use super::patterns::{FABRIC_LABEL, FABRIC_PATTERNS};
use super::{char_len, FieldExtractor};

/// Maximum number of fabric entries reported.
pub const MAX_FABRICS: usize = 3;

const MIN_LABEL_SPAN: usize = 5;

/// Fabric type field extractor.
///
/// Collects every catalog fabric named as a whole word (catalog order), then
/// the text following each "Fabric(s):" label. The field is the first
/// [`MAX_FABRICS`] entries joined with ", ".
pub struct FabricExtractor;

impl FabricExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FabricExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FabricExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let entries = self.extract_all(text);
        if entries.is_empty() {
            return None;
        }

        Some(
            entries
                .into_iter()
                .take(MAX_FABRICS)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let catalog_hits = FABRIC_PATTERNS
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(fabric, _)| fabric.to_string());

        let labeled = FABRIC_LABEL.captures_iter(text).filter_map(|caps| {
            let span = caps[1].trim().trim_end_matches([',', ';', '.']);
            (char_len(span) >= MIN_LABEL_SPAN).then(|| span.to_string())
        });

        catalog_hits.chain(labeled).collect()
    }
}

/// Extract the fabric type from normalized text.
pub fn extract_fabric_type(text: &str) -> Option<String> {
    FabricExtractor::new().extract(text)
}
