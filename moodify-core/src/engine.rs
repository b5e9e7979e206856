//! Decision facade
//!
//! Ties the pipeline together for one request: normalize, build the
//! active set, then feed the selector and the meta-emotion engine
//! independently. Pure and deterministic; the only failure mode is a
//! probability vector of the wrong length.

use crate::active::ActiveSet;
use crate::meta::{MetaEngine, MetaGroups};
use crate::select::{self, EmotionScore, RareFallback};
use crate::text;
use crate::thresholds::ThresholdTable;
use crate::Result;

/// The outcome of one request
#[derive(Debug, Clone)]
pub struct Decision {
    /// Labels that cleared their effective threshold, with scores
    pub active: ActiveSet,
    /// Top-K active emotions, score descending
    pub top: Vec<EmotionScore>,
    /// Primary label after rare-label substitution; "neutral" when the
    /// active set is empty
    pub primary: String,
    /// Meta-emotion chosen by the layered rule pipeline
    pub meta_emotion: String,
}

/// The decision engine, holding the immutable configuration tables.
///
/// Construct once per configuration; safe to share across threads since
/// nothing is mutated after construction.
pub struct DecisionEngine {
    thresholds: ThresholdTable,
    rare_fallback: RareFallback,
    meta: MetaEngine,
}

impl DecisionEngine {
    /// Engine with the built-in group and rare-fallback tables
    pub fn new(thresholds: ThresholdTable) -> Self {
        Self::with_tables(thresholds, MetaGroups::default(), RareFallback::default())
    }

    /// Engine with fully custom tables
    pub fn with_tables(
        thresholds: ThresholdTable,
        groups: MetaGroups,
        rare_fallback: RareFallback,
    ) -> Self {
        Self {
            thresholds,
            rare_fallback,
            meta: MetaEngine::new(groups),
        }
    }

    /// Decide on one request.
    ///
    /// `probs` must be index-aligned with the label registry; any other
    /// length fails without a partial result.
    pub fn decide(&self, raw_text: &str, probs: &[f32]) -> Result<Decision> {
        let normalized = text::normalize(raw_text);
        let active = ActiveSet::build(probs, raw_text, &self.thresholds)?;
        let top = select::rank(&active);
        let primary = select::primary(&top, &self.rare_fallback);
        let meta_emotion = self.meta.evaluate(&normalized, probs, &active);
        Ok(Decision {
            active,
            top,
            primary,
            meta_emotion,
        })
    }
}
