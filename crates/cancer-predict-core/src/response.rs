//! Response envelope mapping.
//!
//! Turns a pipeline outcome, or a fault raised by the hosting transport,
//! into the `{status, message, data?}` JSON envelope and a numeric HTTP
//! status. Rules are checked in order:
//!
//! 1. payload too large → 413 with the size-limit message
//! 2. any other fault → the fault's own status with a fixed message
//! 3. success → 200 with the classification
//!
//! Diagnostic text from errors is dropped here; only the status survives.

use serde::Serialize;

use crate::domain::{ClassificationResult, InputError};

/// Largest accepted request body, in bytes.
pub const MAX_PAYLOAD_BYTES: usize = 1_000_000;

/// Message for bodies over [`MAX_PAYLOAD_BYTES`].
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str =
    "Payload content length greater than maximum allowed: 1000000";

/// Message for every other failed prediction.
pub const PREDICTION_FAILED_MESSAGE: &str = "Terjadi kesalahan dalam melakukan prediksi";

/// Message for a successful prediction.
pub const PREDICTION_SUCCESS_MESSAGE: &str = "Model is predicted successfully";

const STATUS_OK: u16 = 200;
const STATUS_PAYLOAD_TOO_LARGE: u16 = 413;

/// A failure on the request path, classified for the client.
#[derive(Debug)]
pub enum Fault {
    /// The transport rejected the body for exceeding the size limit.
    PayloadTooLarge,
    /// The pipeline rejected the payload.
    Input(InputError),
    /// Any other fault raised by the hosting layer, with its status.
    Transport {
        /// HTTP status chosen by the transport.
        status: u16,
    },
}

impl Fault {
    /// Classifies a bare status code raised by the transport.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status == STATUS_PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::Transport { status }
        }
    }
}

impl From<InputError> for Fault {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

/// Envelope status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// Prediction succeeded.
    Success,
    /// Request failed.
    Fail,
}

/// JSON body of every prediction response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    /// Outcome marker.
    pub status: EnvelopeStatus,
    /// Human readable message.
    pub message: &'static str,
    /// Classification, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ClassificationResult>,
}

impl Envelope {
    /// Builds a failure envelope.
    #[must_use]
    pub const fn fail(message: &'static str) -> Self {
        Self {
            status: EnvelopeStatus::Fail,
            message,
            data: None,
        }
    }

    /// Builds a success envelope.
    #[must_use]
    pub const fn success(data: ClassificationResult) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: PREDICTION_SUCCESS_MESSAGE,
            data: Some(data),
        }
    }
}

/// Maps outcomes to `(status, envelope)` pairs.
pub struct ResponseMapper;

impl ResponseMapper {
    /// Maps a prediction outcome.
    #[must_use]
    pub fn map(outcome: Result<ClassificationResult, Fault>) -> (u16, Envelope) {
        match outcome {
            Ok(result) => (STATUS_OK, Envelope::success(result)),
            Err(fault) => Self::map_fault(&fault),
        }
    }

    /// Maps a fault.
    #[must_use]
    pub const fn map_fault(fault: &Fault) -> (u16, Envelope) {
        match fault {
            Fault::PayloadTooLarge => (
                STATUS_PAYLOAD_TOO_LARGE,
                Envelope::fail(PAYLOAD_TOO_LARGE_MESSAGE),
            ),
            Fault::Input(err) => (err.status_code(), Envelope::fail(PREDICTION_FAILED_MESSAGE)),
            Fault::Transport { status } => (*status, Envelope::fail(PREDICTION_FAILED_MESSAGE)),
        }
    }
}
