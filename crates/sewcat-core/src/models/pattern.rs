//! Structured fields read off a sewing pattern envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Candidate field values extracted from recognized envelope text.
///
/// Every member is optional: absence is always a valid outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Pattern company, always a canonical catalog name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Pattern number, uppercase, 3-6 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_number: Option<String>,

    /// Pattern name, 5-50 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_name: Option<String>,

    /// Size range such as "6-14" or "XL", 1-20 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_range: Option<String>,

    /// Up to three fabric terms joined with ", ".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_type: Option<String>,

    /// Sewing difficulty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl ExtractedFields {
    /// Number of fields that were found.
    pub fn found_count(&self) -> usize {
        self.presence().iter().filter(|(_, present)| *present).count()
    }

    /// Names of the fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.presence()
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name)
            .collect()
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.found_count() == 0
    }

    fn presence(&self) -> [(&'static str, bool); 6] {
        [
            ("company", self.company.is_some()),
            ("pattern_number", self.pattern_number.is_some()),
            ("pattern_name", self.pattern_name.is_some()),
            ("size_range", self.size_range.is_some()),
            ("fabric_type", self.fabric_type.is_some()),
            ("difficulty", self.difficulty.is_some()),
        ]
    }
}

/// Sewing difficulty level printed on an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// Normalize free text mentioning a difficulty.
    ///
    /// Matching is by case-insensitive substring, checked from easiest to
    /// hardest. Text that mentions no known level yields `None`.
    pub fn from_text(s: &str) -> Option<Self> {
        let s = s.to_lowercase();

        if s.contains("beginner") || s.contains("easy") || s.contains("level 1") {
            Some(Difficulty::Beginner)
        } else if s.contains("intermediate") || s.contains("level 2") {
            Some(Difficulty::Intermediate)
        } else if s.contains("advanced") || s.contains("level 3") {
            Some(Difficulty::Advanced)
        } else if s.contains("expert") || s.contains("level 4") {
            Some(Difficulty::Expert)
        } else {
            None
        }
    }

    /// Display name, as shown in the catalog form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_text() {
        assert_eq!(Difficulty::from_text("Easy"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::from_text("LEVEL 1"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::from_text("intermediate"), Some(Difficulty::Intermediate));
        assert_eq!(Difficulty::from_text("Level 3"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::from_text("Skill Level: Expert"), Some(Difficulty::Expert));
        assert_eq!(Difficulty::from_text("Skill Level: Moderate"), None);
    }

    #[test]
    fn test_difficulty_serializes_as_display_name() {
        let json = serde_json::to_string(&Difficulty::Advanced).unwrap();
        assert_eq!(json, "\"Advanced\"");
        assert_eq!(Difficulty::Advanced.to_string(), "Advanced");
    }

    #[test]
    fn test_missing_fields() {
        let fields = ExtractedFields {
            company: Some("Vogue".to_string()),
            difficulty: Some(Difficulty::Expert),
            ..Default::default()
        };

        assert_eq!(fields.found_count(), 2);
        assert!(!fields.is_empty());
        assert_eq!(
            fields.missing_fields(),
            vec!["pattern_number", "pattern_name", "size_range", "fabric_type"]
        );
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let fields = ExtractedFields {
            size_range: Some("6-14".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"size_range":"6-14"}"#);
    }
}
