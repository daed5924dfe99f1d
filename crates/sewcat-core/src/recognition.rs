//! Seam to the external text recognition service.
//!
//! The service turns an envelope photo into raw text. Its client lives
//! outside this crate; anything implementing [`TextRecognizer`] can feed the
//! extractor.

use tracing::{debug, warn};

use crate::error::{RecognitionError, Result};
use crate::extract::{extract, ExtractionResult};

/// A text recognition service.
pub trait TextRecognizer {
    /// Recognize the text in an encoded image.
    fn recognize(&self, image: &[u8]) -> std::result::Result<String, RecognitionError>;
}

/// Recognize an envelope photo and extract its fields.
///
/// The service is called exactly once. Its failures are returned to the
/// caller unchanged so the user can fall back to typing the fields in.
pub fn recognize_and_extract<R: TextRecognizer + ?Sized>(
    recognizer: &R,
    image: &[u8],
) -> Result<ExtractionResult> {
    if image.is_empty() {
        return Err(RecognitionError::EmptyImage.into());
    }

    let text = recognizer.recognize(image).map_err(|e| {
        warn!("Text recognition failed: {}", e);
        e
    })?;

    if text.trim().is_empty() {
        return Err(RecognitionError::NoText.into());
    }

    debug!("Recognized {} characters of text", text.len());
    Ok(extract(&text))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::SewcatError;

    struct FixedText(&'static str);

    impl TextRecognizer for FixedText {
        fn recognize(&self, _image: &[u8]) -> std::result::Result<String, RecognitionError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingService {
        calls: Cell<usize>,
    }

    impl TextRecognizer for FailingService {
        fn recognize(&self, _image: &[u8]) -> std::result::Result<String, RecognitionError> {
            self.calls.set(self.calls.get() + 1);
            Err(RecognitionError::Service("503 Service Unavailable".to_string()))
        }
    }

    #[test]
    fn test_recognize_and_extract() {
        let recognizer = FixedText("Vogue\nV9253\nSize 8-16");
        let result = recognize_and_extract(&recognizer, b"jpeg").unwrap();

        assert_eq!(result.text, "Vogue V9253 Size 8-16");
        assert_eq!(result.fields.company.as_deref(), Some("Vogue"));
        assert_eq!(result.fields.pattern_number.as_deref(), Some("V9253"));
    }

    #[test]
    fn test_service_failure_is_not_retried() {
        let service = FailingService { calls: Cell::new(0) };
        let err = recognize_and_extract(&service, b"jpeg").unwrap_err();

        assert!(matches!(
            err,
            SewcatError::Recognition(RecognitionError::Service(_))
        ));
        assert_eq!(service.calls.get(), 1);
    }

    #[test]
    fn test_empty_image_rejected_before_service_call() {
        let service = FailingService { calls: Cell::new(0) };
        let err = recognize_and_extract(&service, &[]).unwrap_err();

        assert!(matches!(err, SewcatError::Recognition(RecognitionError::EmptyImage)));
        assert_eq!(service.calls.get(), 0);
    }

    #[test]
    fn test_blank_text_is_no_text() {
        let err = recognize_and_extract(&FixedText(" \n "), b"png").unwrap_err();
        assert!(matches!(err, SewcatError::Recognition(RecognitionError::NoText)));
    }

    #[test]
    fn test_trait_object() {
        let recognizer: Box<dyn TextRecognizer> = Box::new(FixedText("Burda 6001"));
        let result = recognize_and_extract(recognizer.as_ref(), b"png").unwrap();
        assert_eq!(result.fields.company.as_deref(), Some("Burda"));
    }
}
