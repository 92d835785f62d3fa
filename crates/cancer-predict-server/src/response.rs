//! Axum glue for the response envelope.
//!
//! Handlers render their own outcomes through [`respond`]. Everything else
//! that leaves the router with an error status (body limit rejections,
//! unknown routes, wrong methods) is rewritten by [`envelope_errors`], so
//! clients only ever see the envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cancer_predict_core::{ClassificationResult, Fault, ResponseMapper};
use tracing::debug;

/// Marks responses whose body is already an envelope.
#[derive(Debug, Clone, Copy)]
struct Enveloped;

/// Renders a prediction outcome as an HTTP response.
#[must_use]
pub fn respond(outcome: Result<ClassificationResult, Fault>) -> Response {
    let (status, envelope) = ResponseMapper::map(outcome);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = (status, Json(envelope)).into_response();
    response.extensions_mut().insert(Enveloped);
    response
}

/// Replaces the body of any bare error response with a failure envelope.
pub async fn envelope_errors(response: Response) -> Response {
    let status = response.status();
    if response.extensions().get::<Enveloped>().is_some()
        || !(status.is_client_error() || status.is_server_error())
    {
        return response;
    }

    debug!(status = status.as_u16(), "Rewriting transport error");
    respond(Err(Fault::from_status(status.as_u16())))
}
