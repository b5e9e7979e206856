//! End-to-end tests for the decision facade
//!
//! Exercises the full pipeline the way the service does: raw text plus a
//! classifier probability vector in, a complete decision out.

use moodify_core::labels::{label_index, NUM_LABELS};
use moodify_core::select::TOP_K;
use moodify_core::{DecisionEngine, Error, ThresholdTable};
use std::collections::HashMap;

fn probs_with(pairs: &[(&str, f32)]) -> Vec<f32> {
    let mut probs = vec![0.0; NUM_LABELS];
    for &(label, p) in pairs {
        probs[label_index(label).unwrap()] = p;
    }
    probs
}

fn engine() -> DecisionEngine {
    DecisionEngine::new(ThresholdTable::default())
}

#[test]
fn test_no_signal_everything_neutral() {
    let decision = engine()
        .decide("anything at all here", &vec![0.0; NUM_LABELS])
        .unwrap();
    assert!(decision.active.is_empty());
    assert!(decision.top.is_empty());
    assert_eq!(decision.primary, "neutral");
    assert_eq!(decision.meta_emotion, "neutral");
}

#[test]
fn test_confident_single_strong_fear() {
    let probs = probs_with(&[("fear", 0.85)]);
    let decision = engine()
        .decide("something plain with no trigger words", &probs)
        .unwrap();
    assert_eq!(decision.primary, "fear");
    assert_eq!(decision.meta_emotion, "negative_strong");
}

#[test]
fn test_burnout_literal_overrides_everything() {
    let probs = probs_with(&[("neutral", 0.30), ("joy", 0.40)]);
    let decision = engine().decide("I'm just existing.", &probs).unwrap();
    assert_eq!(decision.meta_emotion, "burnout_exhaustion");
}

#[test]
fn test_negated_calm_does_not_read_calm() {
    let probs = probs_with(&[("neutral", 0.40)]);
    let decision = engine().decide("I don't feel calm at all", &probs).unwrap();
    assert_eq!(decision.meta_emotion, "neutral");
}

#[test]
fn test_top_k_bound() {
    let probs = probs_with(&[
        ("joy", 0.90),
        ("anger", 0.80),
        ("neutral", 0.70),
        ("fear", 0.60),
        ("sadness", 0.50),
    ]);
    let decision = engine()
        .decide("five labels are active in this sentence", &probs)
        .unwrap();
    assert_eq!(decision.active.len(), 5);
    assert_eq!(decision.top.len(), TOP_K);
    assert!(decision.top.len() <= decision.active.len());
}

#[test]
fn test_rare_primary_is_substituted() {
    let probs = probs_with(&[("grief", 0.80), ("joy", 0.50)]);
    let decision = engine()
        .decide("a sentence without any trigger phrases", &probs)
        .unwrap();
    assert_eq!(decision.primary, "sadness");
    // The active set itself keeps the raw label
    assert!(decision.active.contains("grief"));
}

#[test]
fn test_determinism() {
    let probs = probs_with(&[("joy", 0.55), ("surprise", 0.35), ("neutral", 0.30)]);
    let text = "well this was quite the unexpected day";
    let first = engine().decide(text, &probs).unwrap();
    for _ in 0..5 {
        let again = engine().decide(text, &probs).unwrap();
        assert_eq!(again.primary, first.primary);
        assert_eq!(again.meta_emotion, first.meta_emotion);
        let names: Vec<&str> = again.top.iter().map(|e| e.name).collect();
        let first_names: Vec<&str> = first.top.iter().map(|e| e.name).collect();
        assert_eq!(names, first_names);
    }
}

#[test]
fn test_wrong_vector_length_fails() {
    let result = engine().decide("some text", &[0.1, 0.2, 0.3]);
    assert!(matches!(result, Err(Error::Shape { got: 3, .. })));
}

#[test]
fn test_raising_threshold_never_adds_a_label() {
    let probs = probs_with(&[("joy", 0.50)]);
    let text = "a perfectly ordinary sentence about the weather";

    let relaxed = DecisionEngine::new(ThresholdTable::new(0.30, HashMap::new()));
    let strict = DecisionEngine::new(ThresholdTable::new(
        0.30,
        HashMap::from([("joy".to_string(), 0.60)]),
    ));

    assert!(relaxed.decide(text, &probs).unwrap().active.contains("joy"));
    assert!(!strict.decide(text, &probs).unwrap().active.contains("joy"));
}

#[test]
fn test_short_text_is_harder_to_classify() {
    let probs = probs_with(&[("joy", 0.37)]);
    let long = engine()
        .decide("I am feeling pretty good today", &probs)
        .unwrap();
    let short = engine().decide("pretty good", &probs).unwrap();
    assert!(long.active.contains("joy"));
    assert!(!short.active.contains("joy"));
}
