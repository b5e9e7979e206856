//! HTTP client for the external classifier model service
//!
//! The model service is a black box: text in, a vector of 28 independent
//! per-label sigmoid probabilities out. Vector width is validated by the
//! decision engine, not here. No retries; failures surface to the caller.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Classifier client errors
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("model service returned status {0}")]
    Status(u16),
}

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    scores: Vec<f32>,
}

/// Client for the model service's scoring endpoint
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    base_url: String,
}

impl ModelClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClassifierError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Base URL of the upstream service (for logging)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the text to the model service and return the raw probability
    /// vector
    pub async fn predict(&self, text: &str) -> Result<Vec<f32>, ClassifierError> {
        let url = format!("{}/scores", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ScoreRequest { text })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClassifierError::Status(response.status().as_u16()));
        }
        let body: ScoreResponse = response.json().await?;
        Ok(body.scores)
    }
}
