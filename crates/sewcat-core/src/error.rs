//! Error types for the sewcat-core library.
//!
//! Field extraction itself is total and never returns an error. These types
//! cover the collaborators around it: the text recognition service and the
//! form that becomes a stored pattern record.

use thiserror::Error;

/// Main error type for the sewcat library.
#[derive(Error, Debug)]
pub enum SewcatError {
    /// Text recognition service error.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// Pattern form error.
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by the external text recognition service.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The image payload was empty.
    #[error("image is empty")]
    EmptyImage,

    /// The service call failed before any text was produced.
    #[error("recognition service failed: {0}")]
    Service(String),

    /// The service answered but found no text in the image.
    #[error("no text found in image")]
    NoText,
}

/// Errors raised while turning a pattern form into a record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    /// Required field is missing.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Field validation failed.
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },
}

/// Result type for the sewcat library.
pub type Result<T> = std::result::Result<T, SewcatError>;
