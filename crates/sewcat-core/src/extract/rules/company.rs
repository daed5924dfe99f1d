//! Pattern company extraction against the brand catalog.

use std::collections::HashSet;

use super::catalog::COMPANIES;
use super::patterns::COMPANY_PATTERNS;
use super::FieldExtractor;

/// Company field extractor.
///
/// Two passes, each resolved in catalog order: an exact phrase match, then a
/// loose match where any single word of a catalog name appears as a
/// standalone token of the text.
pub struct CompanyExtractor;

impl CompanyExtractor {
    pub fn new() -> Self {
        Self
    }

    fn exact_matches(&self, text: &str) -> Vec<String> {
        COMPANY_PATTERNS
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    fn token_matches(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: HashSet<&str> = lowered.split_whitespace().collect();

        COMPANIES
            .iter()
            .filter(|name| {
                name.to_lowercase()
                    .split_whitespace()
                    .any(|word| tokens.contains(word))
            })
            .map(|name| name.to_string())
            .collect()
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let exact = self.exact_matches(text);
        if !exact.is_empty() {
            return exact;
        }

        self.token_matches(text)
    }
}

/// Extract the pattern company from normalized text.
pub fn extract_company(text: &str) -> Option<String> {
    CompanyExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_returns_catalog_spelling() {
        assert_eq!(extract_company("SIMPLICITY 8234"), Some("Simplicity".to_string()));
        assert_eq!(extract_company("mccalls m7890"), Some("McCall's".to_string()));
        assert_eq!(extract_company("Helens Closet Blanca"), Some("Helen's Closet".to_string()));
    }

    #[test]
    fn test_exact_match_prefers_catalog_order() {
        // Vogue appears first in the text, Butterick first in the catalog
        assert_eq!(extract_company("Vogue patterns by Butterick"), Some("Butterick".to_string()));
    }

    #[test]
    fn test_token_fallback_first_catalog_entry_wins() {
        // No full name present; "new" belongs to New Look and "sew" to Kwik Sew
        let text = "new sew along collection";
        assert_eq!(extract_company(text), Some("Kwik Sew".to_string()));

        let all = CompanyExtractor::new().extract_all(text);
        assert_eq!(all, vec!["Kwik Sew".to_string(), "New Look".to_string()]);
    }

    #[test]
    fn test_token_fallback_needs_standalone_tokens() {
        assert_eq!(extract_company("sewing newcomers"), None);
    }

    #[test]
    fn test_no_company() {
        assert_eq!(extract_company(""), None);
        assert_eq!(extract_company("Wrap Dress 6-14"), None);
    }
}
