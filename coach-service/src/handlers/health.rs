use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "coach-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check: the service can only answer coach requests with a credential.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.text_provider.is_configured() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "error": "AI provider is not configured"
            })),
        )
    }
}
