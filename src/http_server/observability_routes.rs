//! Health and metrics routes

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::observability::MetricsRegistry;

/// Liveness route at the root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Counter snapshot under `/observability`
pub fn observability_routes(metrics: Arc<MetricsRegistry>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_snapshot))
        .with_state(metrics)
}

async fn metrics_snapshot(State(metrics): State<Arc<MetricsRegistry>>) -> Json<Value> {
    Json(serde_json::to_value(metrics.snapshot()).unwrap_or_else(|_| json!({})))
}
