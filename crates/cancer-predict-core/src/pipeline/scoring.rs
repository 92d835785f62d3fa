//! Confidence scoring stage.

use crate::domain::{ConfidenceScore, InputError, NormalizedTensor};
use crate::ports::Classifier;

/// Runs the model once and scales its first output to a percentage.
///
/// # Errors
///
/// Returns [`InputError::Inference`] if the forward pass fails and
/// [`InputError::NonFiniteScore`] if the output is empty or not finite.
pub fn confidence_score(
    classifier: &dyn Classifier,
    tensor: &NormalizedTensor,
) -> Result<ConfidenceScore, InputError> {
    let output = classifier
        .forward(tensor.as_tensor())
        .and_then(|t| t.flatten_all())
        .and_then(|t| t.to_vec1::<f32>())
        .map_err(InputError::Inference)?;

    let probability = output
        .first()
        .copied()
        .ok_or_else(|| InputError::NonFiniteScore("empty model output".to_string()))?;

    if !probability.is_finite() {
        return Err(InputError::NonFiniteScore(format!(
            "model returned {probability}"
        )));
    }

    Ok(ConfidenceScore::from_probability(probability))
}
