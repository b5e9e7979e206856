//! Top-K ranking and primary label selection

use std::collections::HashMap;

use crate::active::ActiveSet;

/// Maximum number of emotions surfaced to the caller
pub const TOP_K: usize = 3;

/// Global minimum score for a label to be surfaced at all
pub const MIN_CONFIDENCE: f32 = 0.15;

/// One ranked emotion entry
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    pub name: &'static str,
    pub score: f32,
}

/// Rank active emotions by score descending and truncate to [`TOP_K`].
///
/// Ties keep label-registry order (stable sort over registry-ordered
/// input). The minimum-confidence floor is already enforced during
/// active-set construction; it is re-checked here so a caller-supplied
/// active set cannot bypass it.
pub fn rank(active: &ActiveSet) -> Vec<EmotionScore> {
    let mut ranked: Vec<EmotionScore> = active
        .iter()
        .filter(|(_, score)| *score >= MIN_CONFIDENCE)
        .map(|(name, score)| EmotionScore { name, score })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(TOP_K);
    ranked
}

/// Substitution table redirecting rare primary labels to more actionable
/// ones. Applied only to the primary label, never to the active set.
#[derive(Debug, Clone)]
pub struct RareFallback {
    map: HashMap<String, String>,
}

impl Default for RareFallback {
    fn default() -> Self {
        let map = [
            ("grief", "sadness"),
            ("relief", "neutral"),
            ("realization", "neutral"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();
        Self { map }
    }
}

impl RareFallback {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    /// Substitute a rare label, passing unmapped labels through unchanged
    pub fn substitute<'a>(&'a self, label: &'a str) -> &'a str {
        self.map.get(label).map(String::as_str).unwrap_or(label)
    }
}

/// Primary label: the top ranked entry after rare-label substitution,
/// or "neutral" when nothing cleared threshold.
pub fn primary(ranked: &[EmotionScore], fallback: &RareFallback) -> String {
    ranked
        .first()
        .map(|top| fallback.substitute(top.name).to_string())
        .unwrap_or_else(|| "neutral".to_string())
}
