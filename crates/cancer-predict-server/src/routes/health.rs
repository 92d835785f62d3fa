//! Health check endpoint

use axum::{extract::State, Json};
use cancer_predict_core::inference::device_name;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: &'static str,
    pub device: &'static str,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.classifier.name(),
        device: device_name(&state.device),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
