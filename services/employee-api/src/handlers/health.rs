use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to CRUD operations using Rust and PostgreSQL";

/// GET /
pub async fn home() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let storage = match state.store.health_check().await {
        Ok(()) => json!({"status": "healthy", "message": "Connected"}),
        Err(e) => json!({"status": "unhealthy", "message": e.to_string()}),
    };
    let status = if storage["status"] == "healthy" {
        "healthy"
    } else {
        "degraded"
    };

    Json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "storage": storage
        }
    }))
}

/// GET /metrics
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<String, (StatusCode, String)> {
    state.metrics.render().map_err(|e| {
        tracing::error!(error = %e, "Failed to encode metrics");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error encoding metrics".to_string(),
        )
    })
}
