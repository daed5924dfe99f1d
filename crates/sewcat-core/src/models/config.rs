//! Configuration structures for the sewcat tools.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SewcatError};

/// Output formats understood by the configuration.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "csv", "text"];

/// Main configuration for sewcat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SewcatConfig {
    /// Output configuration.
    pub output: OutputConfig,
}

/// How extraction results are presented for review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: "json", "csv" or "text".
    pub format: String,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Show the confidence score after the result.
    pub show_confidence: bool,

    /// Include the normalized recognized text in text output.
    pub show_text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: false,
            show_confidence: true,
            show_text: false,
        }
    }
}

impl SewcatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(SewcatError::Config(format!(
                "unknown output format '{}', expected one of {}",
                self.output.format,
                OUTPUT_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SewcatConfig =
            serde_json::from_str(r#"{"output": {"format": "text"}}"#).unwrap();

        assert_eq!(config.output.format, "text");
        assert!(config.output.show_confidence);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SewcatConfig::default();
        config.output.format = "csv".to_string();
        config.output.show_text = true;
        config.save(&path).unwrap();

        assert_eq!(SewcatConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output": {"format": "xml"}}"#).unwrap();

        assert!(matches!(
            SewcatConfig::from_file(&path),
            Err(SewcatError::Config(_))
        ));
    }
}
