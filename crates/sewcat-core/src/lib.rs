//! Core library for sewing pattern envelope processing.
//!
//! This crate provides:
//! - Whitespace normalization of recognized envelope text
//! - Heuristic field extraction (company, pattern number, name, sizes, fabric, difficulty)
//! - Confidence scoring for the extracted fields
//! - Form pre-fill and pattern record models
//! - The seam to an external text recognition service

pub mod error;
pub mod extract;
pub mod models;
pub mod recognition;

pub use error::{FormError, RecognitionError, Result, SewcatError};
pub use extract::{extract, normalize_text, EnvelopeParser, ExtractionResult, PatternParser};
pub use models::form::{FormField, PatternForm, PatternRecord};
pub use models::pattern::{Difficulty, ExtractedFields};
pub use recognition::{recognize_and_extract, TextRecognizer};
