//! Caller-policy configuration for scan handling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Policy constants applied by callers around the extraction core.
///
/// None of these alter the extraction rules themselves; they describe
/// how text is fed in and how results are presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Synthetic confidence assigned to digitally-extracted document
    /// text, which is higher-trust than OCR output.
    pub digital_text_confidence: f64,

    /// Below this confidence the result should be flagged for review.
    pub low_confidence_threshold: f64,

    /// Minimum combined length for a document text layer to count as
    /// present.
    pub min_text_length: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            digital_text_confidence: 95.0,
            low_confidence_threshold: 50.0,
            min_text_length: 50,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ScanError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.digital_text_confidence, 95.0);
        assert_eq!(config.low_confidence_threshold, 50.0);
        assert_eq!(config.min_text_length, 50);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ScanConfig =
            serde_json::from_str(r#"{"low_confidence_threshold": 40.0}"#).unwrap();
        assert_eq!(config.low_confidence_threshold, 40.0);
        assert_eq!(config.digital_text_confidence, 95.0);
        assert_eq!(config.min_text_length, 50);
    }
}
