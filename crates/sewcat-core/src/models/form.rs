//! Pattern entry form and the stored pattern record.
//!
//! The form is what the user edits. Extraction results only ever fill in
//! fields the user has left empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormError;
use crate::extract::ExtractionResult;

use super::pattern::{Difficulty, ExtractedFields};

/// User-editable pattern form. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternForm {
    pub company: String,
    pub pattern_number: String,
    pub pattern_name: String,
    pub size_range: String,
    pub fabric_type: String,
    pub difficulty: String,
    pub notes: String,
}

/// A pre-fillable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Company,
    PatternNumber,
    PatternName,
    SizeRange,
    FabricType,
    Difficulty,
}

impl FormField {
    /// Field name as used in the form and in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Company => "company",
            FormField::PatternNumber => "pattern_number",
            FormField::PatternName => "pattern_name",
            FormField::SizeRange => "size_range",
            FormField::FabricType => "fabric_type",
            FormField::Difficulty => "difficulty",
        }
    }
}

impl PatternForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge extracted values into the form.
    ///
    /// A field is written only when it is empty or whitespace-only; anything
    /// the user typed is left untouched. Returns the fields that were written.
    pub fn prefill(&mut self, fields: &ExtractedFields) -> Vec<FormField> {
        let difficulty = fields.difficulty.map(|d| d.as_str().to_string());
        let candidates = [
            (FormField::Company, &mut self.company, fields.company.as_ref()),
            (FormField::PatternNumber, &mut self.pattern_number, fields.pattern_number.as_ref()),
            (FormField::PatternName, &mut self.pattern_name, fields.pattern_name.as_ref()),
            (FormField::SizeRange, &mut self.size_range, fields.size_range.as_ref()),
            (FormField::FabricType, &mut self.fabric_type, fields.fabric_type.as_ref()),
            (FormField::Difficulty, &mut self.difficulty, difficulty.as_ref()),
        ];

        let mut filled = Vec::new();
        for (field, slot, value) in candidates {
            if let Some(value) = value {
                if slot.trim().is_empty() {
                    *slot = value.clone();
                    filled.push(field);
                }
            }
        }

        debug!("Pre-filled {} form fields", filled.len());
        filled
    }

    /// Validate the form and turn it into a storable record.
    ///
    /// When the values came from a scanned envelope, pass the extraction so
    /// its normalized text and confidence are kept on the record.
    pub fn into_record(
        self,
        extraction: Option<&ExtractionResult>,
    ) -> Result<PatternRecord, FormError> {
        let pattern_name = non_empty(self.pattern_name)
            .ok_or_else(|| FormError::MissingField("pattern_name".to_string()))?;

        let difficulty = match non_empty(self.difficulty) {
            Some(text) => Some(
                Difficulty::ALL
                    .into_iter()
                    .find(|d| d.as_str().eq_ignore_ascii_case(&text))
                    .ok_or_else(|| FormError::Validation {
                        field: "difficulty".to_string(),
                        reason: format!("unknown difficulty '{}'", text),
                    })?,
            ),
            None => None,
        };

        Ok(PatternRecord {
            company: non_empty(self.company),
            pattern_number: non_empty(self.pattern_number),
            pattern_name,
            size_range: non_empty(self.size_range),
            fabric_type: non_empty(self.fabric_type),
            difficulty,
            notes: non_empty(self.notes),
            ocr_text: extraction.map(|e| e.text.clone()),
            ocr_confidence: extraction.map(|e| e.confidence),
            created_at: Utc::now(),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A catalogued pattern as handed to the storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_number: Option<String>,

    pub pattern_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_range: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Normalized recognized text the record was scanned from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,

    /// Extraction confidence (0.0 - 1.0) of the scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_confidence: Option<f32>,

    pub created_at: DateTime<Utc>,
}
