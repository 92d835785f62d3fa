//! Router assembly.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use cancer_predict_core::MAX_PAYLOAD_BYTES;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::response::envelope_errors;
use crate::routes;
use crate::state::SharedState;

/// Builds the HTTP router around shared state.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/predict", post(routes::predict::predict))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_PAYLOAD_BYTES))
        .layer(middleware::map_response(envelope_errors))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
