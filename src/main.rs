// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::replay_service::ReplayService;
use crate::infrastructure::config::load_replay_config;
use crate::infrastructure::dataset_source::dataset_source;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{chart_points, health_check, stream_readings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_replay_config()?;

    // Load the historical dataset once (infrastructure layer)
    let repository = dataset_source(&config.dataset.source);
    let dataset = Arc::new(repository.load().await?);
    tracing::info!(
        "loaded dataset: {} temperature samples, {} power samples",
        dataset.temperature.len(),
        dataset.power.len()
    );

    // Create services (application layer)
    let replay_service = ReplayService::new(
        dataset.clone(),
        config.replay.step_ms,
        config.replay.step_seconds,
    );
    let chart_service = ChartService::new(dataset, config.replay.step_seconds);

    // Create application state
    let state = Arc::new(AppState { replay_service, chart_service });

    // Build router (presentation layer)
    // Note: the readings stream stays uncompressed; compressing a
    // long-lived NDJSON stream buffers ticks at the encoder.
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/readings/stream", get(stream_readings))
        .route("/chart", get(chart_points).layer(CompressionLayer::new()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind))?;
    println!("Starting plant-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
