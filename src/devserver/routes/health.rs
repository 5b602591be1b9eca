//! GET /health

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::devserver::dto::HealthResponse;
use crate::devserver::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
