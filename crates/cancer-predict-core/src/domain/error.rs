//! Caller-attributable pipeline errors.

use thiserror::Error;

/// HTTP status for malformed input.
const BAD_REQUEST: u16 = 400;
/// HTTP status for a body in the wrong media type.
const UNSUPPORTED_MEDIA_TYPE: u16 = 415;

/// A failure attributable to the caller's payload.
///
/// Every variant carries its own status classification through
/// [`InputError::status_code`]. The display text is diagnostic only and is
/// never sent back to clients.
#[derive(Debug, Error)]
pub enum InputError {
    /// The request body was empty.
    #[error("image payload is empty")]
    EmptyPayload,

    /// The request did not declare a JPEG body.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The bytes could not be decoded as a JPEG image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image is not 8-bit RGB.
    #[error("unsupported color layout {0}, expected 8-bit RGB")]
    UnsupportedColor(String),

    /// The pixel buffer could not be turned into a tensor.
    #[error("failed to build input tensor: {0}")]
    Tensor(#[source] candle_core::Error),

    /// The model forward pass failed.
    #[error("model inference failed: {0}")]
    Inference(#[source] candle_core::Error),

    /// The model produced no usable score.
    #[error("model produced no usable score: {0}")]
    NonFiniteScore(String),
}

impl InputError {
    /// Returns the HTTP status code attached to this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedContentType(_) => UNSUPPORTED_MEDIA_TYPE,
            _ => BAD_REQUEST,
        }
    }
}
