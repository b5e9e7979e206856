//! moodify-ie (Inference Engine) - emotion decision microservice
//!
//! Receives text, obtains per-label probabilities from the external
//! classifier model service, and answers with the top emotions, the
//! primary label, and the meta-emotion.

use anyhow::Context;
use clap::Parser;
use moodify_core::{DecisionEngine, ThresholdTable};
use moodify_ie::classifier::ModelClient;
use moodify_ie::config::{Cli, Config};
use moodify_ie::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Moodify Inference Engine (moodify-ie) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = Config::resolve(Cli::parse())?;

    // An unusable threshold table is fatal: the engine cannot run on
    // guesses
    let thresholds = ThresholdTable::from_path(&config.thresholds_path).with_context(|| {
        format!(
            "failed to load threshold table from {}",
            config.thresholds_path.display()
        )
    })?;
    info!(
        "✓ Loaded threshold table from {}",
        config.thresholds_path.display()
    );

    let engine = DecisionEngine::new(thresholds);
    let classifier = ModelClient::new(&config.model_url, config.request_timeout)?;
    info!("Model service URL: {}", config.model_url);

    let state = AppState::new(engine, classifier);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("moodify-ie listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
