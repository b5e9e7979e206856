//! REST API implementation for the inference engine

mod health;
mod predict;

pub use health::{health, HealthResponse};
pub use predict::{predict, EmotionEntry, PredictRequest, PredictResponse};
