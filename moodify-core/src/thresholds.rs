//! Per-label activation thresholds and the short-text penalty
//!
//! A label is considered active when its probability clears
//! `base_threshold(label) + length_penalty(token_count)`. The table is
//! loaded once at startup and read-only afterwards.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::text;
use crate::Result;

/// Fallback threshold for labels without a per-label override
pub const DEFAULT_GLOBAL_THRESHOLD: f32 = 0.30;

/// Texts shorter than this many whitespace tokens get the penalty
pub const SHORT_TEXT_TOKEN_LIMIT: usize = 4;

/// Additive threshold penalty for very short texts
pub const SHORT_TEXT_PENALTY: f32 = 0.05;

/// On-disk threshold file format
#[derive(Debug, Deserialize)]
struct ThresholdFile {
    global_threshold: f32,
    #[serde(default)]
    per_class_thresholds: HashMap<String, f32>,
}

/// Immutable threshold table: global default plus per-label overrides
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    default_threshold: f32,
    per_label: HashMap<String, f32>,
}

impl ThresholdTable {
    pub fn new(default_threshold: f32, per_label: HashMap<String, f32>) -> Self {
        Self {
            default_threshold,
            per_label,
        }
    }

    /// Load from a threshold JSON file:
    /// `{"global_threshold": 0.3, "per_class_thresholds": {"joy": 0.35, ...}}`
    ///
    /// Labels absent from `per_class_thresholds` use `global_threshold`.
    /// A missing or malformed file is an error; callers treat it as fatal
    /// at startup.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse the threshold file format from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ThresholdFile = serde_json::from_str(json)?;
        Ok(Self {
            default_threshold: file.global_threshold,
            per_label: file.per_class_thresholds,
        })
    }

    /// Base threshold for a label, falling back to the global default
    pub fn base_threshold(&self, label: &str) -> f32 {
        self.per_label
            .get(label)
            .copied()
            .unwrap_or(self.default_threshold)
    }

    /// Additive penalty for short texts, making them harder to classify
    /// positively
    pub fn length_penalty(token_count: usize) -> f32 {
        if token_count < SHORT_TEXT_TOKEN_LIMIT {
            SHORT_TEXT_PENALTY
        } else {
            0.0
        }
    }

    /// Effective threshold for a label given the raw request text
    pub fn effective_threshold(&self, label: &str, raw_text: &str) -> f32 {
        self.base_threshold(label) + Self::length_penalty(text::token_count(raw_text))
    }
}

impl Default for ThresholdTable {
    /// Tuned per-class thresholds shipped with the classifier model
    fn default() -> Self {
        let per_label = [
            ("admiration", 0.45),
            ("amusement", 0.25),
            ("anger", 0.50),
            ("annoyance", 0.25),
            ("approval", 0.30),
            ("caring", 0.25),
            ("confusion", 0.30),
            ("curiosity", 0.30),
            ("desire", 0.10),
            ("disappointment", 0.15),
            ("disapproval", 0.20),
            ("disgust", 0.20),
            ("embarrassment", 0.25),
            ("excitement", 0.25),
            ("fear", 0.40),
            ("gratitude", 0.50),
            ("grief", 0.30),
            ("joy", 0.35),
            ("love", 0.50),
            ("nervousness", 0.20),
            ("optimism", 0.30),
            ("pride", 0.05),
            ("realization", 0.25),
            ("relief", 0.05),
            ("remorse", 0.35),
            ("sadness", 0.40),
            ("surprise", 0.15),
            ("neutral", 0.25),
        ]
        .into_iter()
        .map(|(label, threshold)| (label.to_string(), threshold))
        .collect();

        Self {
            default_threshold: DEFAULT_GLOBAL_THRESHOLD,
            per_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unknown_label_uses_default() {
        let table = ThresholdTable::new(0.30, HashMap::new());
        assert!((table.base_threshold("joy") - 0.30).abs() < f32::EPSILON);
    }

    #[test]
    fn test_override_wins() {
        let table = ThresholdTable::default();
        assert!((table.base_threshold("fear") - 0.40).abs() < f32::EPSILON);
        assert!((table.base_threshold("pride") - 0.05).abs() < f32::EPSILON);
    }

    #[test]
    fn test_length_penalty_boundary() {
        assert!((ThresholdTable::length_penalty(3) - SHORT_TEXT_PENALTY).abs() < f32::EPSILON);
        assert_eq!(ThresholdTable::length_penalty(4), 0.0);
        assert_eq!(ThresholdTable::length_penalty(100), 0.0);
    }

    #[test]
    fn test_effective_threshold_adds_penalty_for_short_text() {
        let table = ThresholdTable::default();
        assert!((table.effective_threshold("joy", "so happy") - 0.40).abs() < 1e-6);
        assert!((table.effective_threshold("joy", "I am so happy today") - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_from_json() {
        let table = ThresholdTable::from_json(
            r#"{"global_threshold": 0.25, "per_class_thresholds": {"fear": 0.4}}"#,
        )
        .unwrap();
        assert!((table.base_threshold("fear") - 0.40).abs() < f32::EPSILON);
        assert!((table.base_threshold("joy") - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_json_without_per_class_table() {
        let table = ThresholdTable::from_json(r#"{"global_threshold": 0.3}"#).unwrap();
        assert!((table.base_threshold("sadness") - 0.30).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ThresholdTable::from_json("{").is_err());
        assert!(ThresholdTable::from_json(r#"{"per_class_thresholds": {}}"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"global_threshold": 0.3, "per_class_thresholds": {{"joy": 0.35}}}}"#
        )
        .unwrap();
        let table = ThresholdTable::from_path(file.path()).unwrap();
        assert!((table.base_threshold("joy") - 0.35).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ThresholdTable::from_path(Path::new("/nonexistent/thresholds.json")).is_err());
    }
}
