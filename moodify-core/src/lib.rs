//! # Moodify Core Library
//!
//! Inference-time decision engine for multi-label emotion classification:
//! - Label registry (the 28 base emotion labels)
//! - Threshold table with per-label overrides and short-text penalty
//! - Active-emotion set construction
//! - Top-K ranking and primary label selection
//! - Layered meta-emotion rule pipeline
//!
//! The engine consumes a probability vector produced by an external
//! classifier; it performs no I/O and holds no mutable state. All
//! configuration tables are injected into [`DecisionEngine`] at
//! construction time, so independent configurations can coexist in one
//! process.

pub mod active;
pub mod engine;
pub mod error;
pub mod labels;
pub mod meta;
pub mod negation;
pub mod select;
pub mod text;
pub mod thresholds;

pub use active::ActiveSet;
pub use engine::{Decision, DecisionEngine};
pub use error::{Error, Result};
pub use select::EmotionScore;
pub use thresholds::ThresholdTable;
