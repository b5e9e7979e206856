//! Layered meta-emotion decision pipeline
//!
//! The engine walks an explicit, ordered rule table. Critical text
//! patterns always run first; the model-dominant layer runs only when the
//! confidence gate is open and the rule-assisted layer only when it is
//! closed; the fallback layer guarantees a result. The first rule that
//! matches wins.

use tracing::debug;

use crate::active::ActiveSet;
use crate::labels;

use super::groups::MetaGroups;
use super::rules;

/// The model-dominant layer opens when the peak probability clears this
pub const CONFIDENCE_GATE: f32 = 0.70;

/// Pipeline layers in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Text patterns that outrank the model regardless of confidence
    CriticalPattern,
    /// Aggregation and overrides driven by the model's scores
    ModelDominant,
    /// Keyword heuristics that assist a low-confidence model
    RuleAssisted,
    /// Deterministic fallbacks; always produce a result
    Fallback,
}

/// Everything a rule may consult. Rules are pure functions of this.
pub struct RuleContext<'a> {
    /// Normalized (lower-cased) request text
    pub text: &'a str,
    /// Raw classifier probabilities, index-aligned to the label registry
    pub probs: &'a [f32],
    pub active: &'a ActiveSet,
    pub groups: &'a MetaGroups,
    /// Whether the confidence gate is open for this request
    pub confident: bool,
}

impl RuleContext<'_> {
    /// Raw probability for a label (not the active score)
    pub fn prob(&self, label: &str) -> f32 {
        labels::label_index(label)
            .and_then(|i| self.probs.get(i))
            .copied()
            .unwrap_or(0.0)
    }
}

/// One named rule in the pipeline
pub struct MetaRule {
    pub name: &'static str,
    pub layer: Layer,
    apply: fn(&RuleContext) -> Option<String>,
}

/// The ordered rule pipeline plus the group table it aggregates over
pub struct MetaEngine {
    groups: MetaGroups,
    rules: Vec<MetaRule>,
}

impl MetaEngine {
    pub fn new(groups: MetaGroups) -> Self {
        Self {
            groups,
            rules: rule_table(),
        }
    }

    /// Rule names in evaluation order, for diagnostics
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Resolve the meta-emotion for one request. Total: always returns a
    /// non-empty name.
    pub fn evaluate(&self, normalized_text: &str, probs: &[f32], active: &ActiveSet) -> String {
        let confident = probs.iter().copied().fold(f32::NEG_INFINITY, f32::max) > CONFIDENCE_GATE;
        let ctx = RuleContext {
            text: normalized_text,
            probs,
            active,
            groups: &self.groups,
            confident,
        };

        for rule in &self.rules {
            let enabled = match rule.layer {
                Layer::CriticalPattern | Layer::Fallback => true,
                Layer::ModelDominant => confident,
                Layer::RuleAssisted => !confident,
            };
            if !enabled {
                continue;
            }
            if let Some(meta) = (rule.apply)(&ctx) {
                debug!(rule = rule.name, meta = %meta, "meta rule matched");
                return meta;
            }
        }

        // The fallback layer is total; this is unreachable in practice.
        "neutral".to_string()
    }
}

/// The declared rule order. Within a layer, earlier rules win.
fn rule_table() -> Vec<MetaRule> {
    vec![
        MetaRule {
            name: "burnout",
            layer: Layer::CriticalPattern,
            apply: rules::burnout,
        },
        MetaRule {
            name: "anxiety_phrase",
            layer: Layer::CriticalPattern,
            apply: rules::anxiety_phrase,
        },
        MetaRule {
            name: "care_signal",
            layer: Layer::ModelDominant,
            apply: rules::care_signal,
        },
        MetaRule {
            name: "admiration_care",
            layer: Layer::ModelDominant,
            apply: rules::admiration_care,
        },
        MetaRule {
            name: "fear_priority",
            layer: Layer::ModelDominant,
            apply: rules::fear_priority,
        },
        MetaRule {
            name: "surprise_peak",
            layer: Layer::ModelDominant,
            apply: rules::surprise_peak,
        },
        MetaRule {
            name: "model_aggregate",
            layer: Layer::ModelDominant,
            apply: rules::dominant_group,
        },
        MetaRule {
            name: "passive_frustration_pattern",
            layer: Layer::RuleAssisted,
            apply: rules::passive_frustration_pattern,
        },
        MetaRule {
            name: "passive_frustration_sarcasm",
            layer: Layer::RuleAssisted,
            apply: rules::passive_frustration_sarcasm,
        },
        MetaRule {
            name: "passive_frustration_blend",
            layer: Layer::RuleAssisted,
            apply: rules::passive_frustration_blend,
        },
        MetaRule {
            name: "positive_words",
            layer: Layer::RuleAssisted,
            apply: rules::positive_words,
        },
        MetaRule {
            name: "desire_keywords",
            layer: Layer::RuleAssisted,
            apply: rules::desire_keywords,
        },
        MetaRule {
            name: "care_keywords",
            layer: Layer::RuleAssisted,
            apply: rules::care_keywords,
        },
        MetaRule {
            name: "calm_keywords",
            layer: Layer::RuleAssisted,
            apply: rules::calm_keywords,
        },
        MetaRule {
            name: "neutral_only",
            layer: Layer::Fallback,
            apply: rules::neutral_only,
        },
        MetaRule {
            name: "single_active_label",
            layer: Layer::Fallback,
            apply: rules::single_active_label,
        },
        MetaRule {
            name: "empty_active",
            layer: Layer::Fallback,
            apply: rules::empty_active,
        },
        MetaRule {
            name: "fallback_aggregate",
            layer: Layer::Fallback,
            apply: rules::dominant_group,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{label_index, NUM_LABELS};
    use crate::text::normalize;
    use crate::thresholds::ThresholdTable;

    fn probs_with(pairs: &[(&str, f32)]) -> Vec<f32> {
        let mut probs = vec![0.0; NUM_LABELS];
        for &(label, p) in pairs {
            probs[label_index(label).unwrap()] = p;
        }
        probs
    }

    fn evaluate(text: &str, pairs: &[(&str, f32)]) -> String {
        let engine = MetaEngine::new(MetaGroups::default());
        let probs = probs_with(pairs);
        let active = ActiveSet::build(&probs, text, &ThresholdTable::default()).unwrap();
        engine.evaluate(&normalize(text), &probs, &active)
    }

    #[test]
    fn test_empty_input_is_neutral() {
        assert_eq!(evaluate("whatever text this is okay", &[]), "neutral");
    }

    #[test]
    fn test_critical_pattern_beats_confident_model() {
        // "just existing" outranks a confident sadness reading
        assert_eq!(
            evaluate("I'm just existing.", &[("sadness", 0.90)]),
            "burnout_exhaustion"
        );
    }

    #[test]
    fn test_confident_fear_takes_priority_override() {
        assert_eq!(
            evaluate("something plain without trigger words", &[("fear", 0.85)]),
            "negative_strong"
        );
    }

    #[test]
    fn test_confident_fear_with_nervousness_is_anxiety() {
        assert_eq!(
            evaluate(
                "something plain without trigger words",
                &[("fear", 0.85), ("nervousness", 0.35)]
            ),
            "anxiety_block"
        );
    }

    #[test]
    fn test_confident_model_aggregation() {
        assert_eq!(
            evaluate(
                "something plain without trigger words",
                &[("anger", 0.75), ("disgust", 0.40)]
            ),
            "negative_strong"
        );
    }

    #[test]
    fn test_rule_assisted_skipped_when_confident() {
        // Sarcasm marker present, but the confident path aggregates instead
        assert_eq!(
            evaluate(
                "fine, this is genuinely amazing work",
                &[("admiration", 0.80), ("joy", 0.40)]
            ),
            "positive_excited"
        );
    }

    #[test]
    fn test_rule_assisted_sarcasm_when_unsure() {
        assert_eq!(
            evaluate(
                "Yeah sure, whatever makes you happy I guess.",
                &[("joy", 0.45), ("disappointment", 0.20)]
            ),
            "passive_frustration"
        );
    }

    #[test]
    fn test_negated_calm_falls_through_to_fallback() {
        // calm is negated, so the calm rule must not fire
        assert_eq!(
            evaluate("I don't feel calm at all", &[("neutral", 0.40)]),
            "neutral"
        );
    }

    #[test]
    fn test_model_dominant_care_override() {
        assert_eq!(
            evaluate(
                "something plain without trigger words",
                &[("gratitude", 0.72), ("joy", 0.40)]
            ),
            "care_block"
        );
    }

    #[test]
    fn test_surprise_override_confident() {
        assert_eq!(
            evaluate(
                "something plain without trigger words",
                &[("surprise", 0.80), ("joy", 0.40)]
            ),
            "positive_excited"
        );
        assert_eq!(
            evaluate(
                "something plain without trigger words",
                &[("surprise", 0.80)]
            ),
            "calm_relief"
        );
    }

    #[test]
    fn test_single_ungrouped_label_hits_aggregate_floor() {
        // embarrassment belongs to no group; aggregation over all-zero
        // group scores resolves to the first declared group
        assert_eq!(
            evaluate(
                "something plain without trigger words",
                &[("embarrassment", 0.50)]
            ),
            "passive_frustration"
        );
    }

    #[test]
    fn test_rule_table_order_is_stable() {
        let engine = MetaEngine::new(MetaGroups::default());
        let names: Vec<&str> = engine.rule_names().collect();
        assert_eq!(names.first(), Some(&"burnout"));
        assert_eq!(names.last(), Some(&"fallback_aggregate"));
        assert_eq!(names.len(), 18);
    }
}
