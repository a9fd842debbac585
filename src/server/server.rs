use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::info;

use crate::config::settings::{MetricsConfig, SettingsConfig};
use crate::observability::metrics::{get_metrics, Metrics};
use crate::observability::routes::MetricsState;
use crate::server::blog_routes::BlogState;
use crate::server::location_routes::LocationState;

#[derive(Clone)]
pub struct AppState {
    pub metrics_state: MetricsState,
    pub blog_state: BlogState,
    pub location_state: LocationState,
}

impl AppState {
    pub fn new(metrics: &Metrics, blog_state: BlogState, location_state: LocationState) -> Self {
        Self {
            metrics_state: MetricsState::new(metrics.registry.clone()),
            blog_state,
            location_state,
        }
    }
}

pub fn build_router(state: AppState, metrics_config: &MetricsConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(state.metrics_state.router(metrics_config))
        .merge(state.blog_state.router())
        .merge(state.location_state.router())
        .with_state(state)
}

/// Bind the configured address and serve until the listener fails.
pub async fn start(settings_config: &SettingsConfig, state: AppState) -> Result<()> {
    let metrics = get_metrics().await;
    let app = build_router(state, &settings_config.metrics);

    let addr = format!("{}:{}", settings_config.server.host, settings_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    info!("listening on {}", addr);

    metrics.up.set(1);
    axum::serve(listener, app).await.context("http server failed")?;
    metrics.up.set(0);

    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
