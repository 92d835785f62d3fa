//! Prediction endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::Response;
use cancer_predict_core::{predict_classification, Fault, InputError};
use tracing::{error, info, warn};

use crate::response::respond;
use crate::state::SharedState;

/// The only media type accepted as a request body.
pub const ACCEPTED_CONTENT_TYPE: &str = "image/jpeg";

/// POST /predict - Classify a raw JPEG body
///
/// The body size limit is enforced by the router before this handler runs.
pub async fn predict(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(err) = check_content_type(&headers) {
        warn!("Rejected prediction request: {err}");
        return respond(Err(err.into()));
    }

    let task_state = Arc::clone(&state);
    let outcome = tokio::task::spawn_blocking(move || {
        predict_classification(task_state.classifier.as_ref(), &body, &task_state.device)
    })
    .await;

    match outcome {
        Ok(Ok(result)) => {
            info!(result = result.result.label(), "Prediction completed");
            respond(Ok(result))
        }
        Ok(Err(err)) => {
            warn!("Prediction failed: {err}");
            respond(Err(Fault::Input(err)))
        }
        Err(err) => {
            error!("Prediction task aborted: {err}");
            respond(Err(Fault::Transport { status: 500 }))
        }
    }
}

/// Checks that the body is declared as JPEG.
fn check_content_type(headers: &HeaderMap) -> Result<(), InputError> {
    let declared = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let media_type = declared.split(';').next().unwrap_or_default().trim();
    if media_type.eq_ignore_ascii_case(ACCEPTED_CONTENT_TYPE) {
        Ok(())
    } else if declared.is_empty() {
        Err(InputError::UnsupportedContentType("<missing>".to_string()))
    } else {
        Err(InputError::UnsupportedContentType(declared.to_string()))
    }
}
