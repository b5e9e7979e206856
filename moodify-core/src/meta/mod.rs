//! Meta-emotion rule engine
//!
//! Maps (normalized text, probability vector, active set) to one of the
//! higher-level meta-emotions through a strictly ordered, short-circuiting
//! layered pipeline.

mod engine;
mod groups;
mod rules;

pub use engine::{Layer, MetaEngine, MetaRule, RuleContext, CONFIDENCE_GATE};
pub use groups::{MetaGroup, MetaGroups};
