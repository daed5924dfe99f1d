//! Data models: extracted fields, pattern form/record, and configuration.

pub mod config;
pub mod form;
pub mod pattern;
