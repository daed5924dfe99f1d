//! WASM bindings for sewing pattern envelope extraction.
//!
//! This crate provides WebAssembly bindings for the catalog front-end.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use sewcat_core::{
    EnvelopeParser, ExtractedFields, ExtractionResult, FormField, PatternForm, PatternParser,
    RecognitionError, TextRecognizer,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract pattern fields from recognized envelope text.
///
/// Returns `{ text, confidence, fields }`; absent fields are omitted.
#[wasm_bindgen]
pub fn extract_pattern_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&sewcat_core::extract(text))
}

/// Collapse whitespace runs to single spaces and trim.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    sewcat_core::normalize_text(text)
}

#[derive(Serialize)]
struct PrefillOutput {
    form: PatternForm,
    filled: Vec<FormField>,
    confidence: f32,
}

/// Pre-fill the empty fields of a form object from recognized text.
///
/// Returns `{ form, filled, confidence }`. Fields the user already typed
/// are never overwritten.
#[wasm_bindgen]
pub fn prefill_form(form: JsValue, text: &str) -> Result<JsValue, JsValue> {
    let mut form: PatternForm = if form.is_undefined() || form.is_null() {
        PatternForm::new()
    } else {
        serde_wasm_bindgen::from_value(form).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let result = sewcat_core::extract(text);
    let filled = form.prefill(&result.fields);

    to_js(&PrefillOutput {
        form,
        filled,
        confidence: result.confidence,
    })
}

/// Text recognition backed by a synchronous JS callback.
///
/// The callback receives a `Uint8Array` and must return the recognized text.
struct JsRecognizer<'a> {
    callback: &'a js_sys::Function,
}

impl TextRecognizer for JsRecognizer<'_> {
    fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError> {
        let bytes = js_sys::Uint8Array::from(image);
        let value = self
            .callback
            .call1(&JsValue::NULL, &bytes)
            .map_err(|e| RecognitionError::Service(describe(&e)))?;

        value
            .as_string()
            .ok_or_else(|| RecognitionError::Service("recognizer did not return a string".into()))
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Run the recognizer callback on an envelope photo and extract its fields.
///
/// Recognition failures reject with a message so the page can fall back
/// to manual entry.
#[wasm_bindgen]
pub fn recognize_envelope(image: &[u8], recognize: &js_sys::Function) -> Result<JsValue, JsValue> {
    let recognizer = JsRecognizer { callback: recognize };

    match sewcat_core::recognize_and_extract(&recognizer, image) {
        Ok(result) => to_js(&result),
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("sewcat: {}", e)));
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Pattern extractor class for browser use.
#[wasm_bindgen]
pub struct PatternExtractor {
    parser: EnvelopeParser,
}

#[derive(Serialize)]
struct ExtractSummary {
    text: String,
    confidence: f32,
    fields: ExtractedFields,
    found_count: usize,
    missing_fields: Vec<&'static str>,
}

impl From<ExtractionResult> for ExtractSummary {
    fn from(result: ExtractionResult) -> Self {
        Self {
            found_count: result.fields.found_count(),
            missing_fields: result.fields.missing_fields(),
            text: result.text,
            confidence: result.confidence,
            fields: result.fields,
        }
    }
}

#[wasm_bindgen]
impl PatternExtractor {
    /// Create a new pattern extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: EnvelopeParser::new(),
        }
    }

    /// Extract pattern fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// Extract with the found/missing field summary used by the review dialog.
    #[wasm_bindgen]
    pub fn extract_with_summary(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&ExtractSummary::from(self.parser.parse(text)))
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}
