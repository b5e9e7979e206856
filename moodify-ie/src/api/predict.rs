//! Prediction endpoint

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EmotionEntry {
    pub name: String,
    pub score: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub emotions: Vec<EmotionEntry>,
    pub primary_emotion: String,
    pub meta_emotion: String,
}

/// POST /predict
///
/// Scores the text with the external classifier, then runs the decision
/// engine over the probability vector.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text is required".to_string()));
    }

    let scores = state.classifier.predict(&request.text).await?;
    let decision = state.engine.decide(&request.text, &scores)?;

    info!(
        primary = %decision.primary,
        meta = %decision.meta_emotion,
        active = decision.active.len(),
        "prediction complete"
    );

    let emotions = decision
        .top
        .iter()
        .map(|entry| EmotionEntry {
            name: entry.name.to_string(),
            score: round3(entry.score),
        })
        .collect();

    Ok(Json(PredictResponse {
        emotions,
        primary_emotion: decision.primary,
        meta_emotion: decision.meta_emotion,
    }))
}

/// Scores are reported to callers with 3 decimal digits
fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.8567), 0.857);
        assert_eq!(round3(0.1), 0.1);
        assert_eq!(round3(0.0005), 0.001);
    }
}
