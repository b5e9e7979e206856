//! moodify-ie library - Inference Engine service
//!
//! HTTP facade over the moodify-core decision engine plus a client for
//! the external classifier model service.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use moodify_core::DecisionEngine;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::classifier::ModelClient;

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Decision engine with its immutable configuration tables
    pub engine: Arc<DecisionEngine>,
    /// Client for the external classifier model service
    pub classifier: Arc<ModelClient>,
}

impl AppState {
    /// Create new application state
    pub fn new(engine: DecisionEngine, classifier: ModelClient) -> Self {
        Self {
            engine: Arc::new(engine),
            classifier: Arc::new(classifier),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(api::predict))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
