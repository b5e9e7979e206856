//! Fixed registry of the 28 base emotion labels
//!
//! Order matches the classifier's output vector and is load-bearing for
//! indexing only; it carries no semantic meaning. The set is closed and
//! never mutated at runtime.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Number of base emotion labels (classifier output width)
pub const NUM_LABELS: usize = 28;

/// Base emotion labels in classifier output order
pub const LABELS: [&str; NUM_LABELS] = [
    "admiration",
    "amusement",
    "anger",
    "annoyance",
    "approval",
    "caring",
    "confusion",
    "curiosity",
    "desire",
    "disappointment",
    "disapproval",
    "disgust",
    "embarrassment",
    "excitement",
    "fear",
    "gratitude",
    "grief",
    "joy",
    "love",
    "nervousness",
    "optimism",
    "pride",
    "realization",
    "relief",
    "remorse",
    "sadness",
    "surprise",
    "neutral",
];

static LABEL_INDEX: Lazy<HashMap<&'static str, usize>> =
    Lazy::new(|| LABELS.iter().enumerate().map(|(i, &l)| (l, i)).collect());

/// Look up the vector index of a label name
pub fn label_index(name: &str) -> Option<usize> {
    LABEL_INDEX.get(name).copied()
}

/// Look up the label name at a vector index
pub fn label_name(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}
