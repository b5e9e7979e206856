//! Error types for moodify-ie

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::classifier::ClassifierError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Classifier model service failure (502)
    #[error("Model service error: {0}")]
    Upstream(#[from] ClassifierError),

    /// Decision engine failure
    #[error("Decision error: {0}")]
    Engine(#[from] moodify_core::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Upstream(err) => {
                (StatusCode::BAD_GATEWAY, "MODEL_UNAVAILABLE", err.to_string())
            }
            // A wrong-width score vector is an upstream contract
            // violation, not an internal fault
            ApiError::Engine(err @ moodify_core::Error::Shape { .. }) => {
                (StatusCode::BAD_GATEWAY, "MODEL_CONTRACT", err.to_string())
            }
            ApiError::Engine(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
