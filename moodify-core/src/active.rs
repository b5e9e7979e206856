//! Active-emotion set construction
//!
//! Combines the classifier's probability vector with the threshold table
//! to decide which labels are active for one request. Built fresh per
//! request, never persisted.

use crate::labels::{self, LABELS, NUM_LABELS};
use crate::select::MIN_CONFIDENCE;
use crate::thresholds::ThresholdTable;
use crate::{Error, Result};

/// Labels whose probability cleared their effective threshold, with their
/// scores, in label-registry order.
#[derive(Debug, Clone, Default)]
pub struct ActiveSet {
    entries: Vec<(usize, f32)>,
}

impl ActiveSet {
    /// Build the active set for one request.
    ///
    /// A label is included when its probability is at or above both its
    /// effective threshold (base + length penalty for the raw text) and
    /// the global minimum-confidence floor.
    pub fn build(probs: &[f32], raw_text: &str, thresholds: &ThresholdTable) -> Result<Self> {
        if probs.len() != NUM_LABELS {
            return Err(Error::Shape {
                expected: NUM_LABELS,
                got: probs.len(),
            });
        }

        let mut entries = Vec::new();
        for (i, &label) in LABELS.iter().enumerate() {
            let p = probs[i];
            if p >= thresholds.effective_threshold(label, raw_text) && p >= MIN_CONFIDENCE {
                entries.push((i, p));
            }
        }
        Ok(Self { entries })
    }

    /// Score of an active label, 0.0 when the label is not active
    pub fn score(&self, label: &str) -> f32 {
        labels::label_index(label)
            .and_then(|idx| self.entries.iter().find(|(i, _)| *i == idx))
            .map(|&(_, p)| p)
            .unwrap_or(0.0)
    }

    pub fn contains(&self, label: &str) -> bool {
        labels::label_index(label).is_some_and(|idx| self.entries.iter().any(|(i, _)| *i == idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Active (label, score) pairs in label-registry order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.entries.iter().map(|&(i, p)| (LABELS[i], p))
    }
}
