//! Inference pipeline: decode → score → decide.
//!
//! Each stage is a plain function so the transport layer can run the whole
//! sequence inside a blocking task without sharing mutable state.

mod decision;
mod preprocess;
mod scoring;

pub use decision::{determine_result, CANCER_THRESHOLD};
pub use preprocess::preprocess_image;
pub use scoring::confidence_score;

use candle_core::Device;
use tracing::debug;

use crate::domain::{ClassificationResult, InputError};
use crate::ports::Classifier;

/// Classifies a raw JPEG payload.
///
/// # Arguments
///
/// * `classifier` - The loaded model
/// * `image` - Raw request body, expected to be a JPEG
/// * `device` - Device the input tensor is allocated on
///
/// # Errors
///
/// Every failure, whether from decoding, tensor allocation or the model
/// itself, is reported as an [`InputError`].
pub fn predict_classification(
    classifier: &dyn Classifier,
    image: &[u8],
    device: &Device,
) -> Result<ClassificationResult, InputError> {
    let tensor = preprocess_image(image, device)?;
    debug!(bytes = image.len(), shape = ?tensor.dims(), "Image normalized");

    let score = confidence_score(classifier, &tensor)?;
    debug!(model = classifier.name(), %score, "Confidence computed");

    Ok(determine_result(score))
}
