//! Classifier port for model backends.

use candle_core::Tensor;

/// Port for a loaded classification model.
///
/// Implementations must be safe to call concurrently: the server shares a
/// single instance across all requests without locking.
pub trait Classifier: Send + Sync {
    /// Returns the name of this model.
    fn name(&self) -> &'static str;

    /// Runs a forward pass.
    ///
    /// # Arguments
    ///
    /// * `input` - Batch tensor of shape `(1, 224, 224, 3)`
    ///
    /// # Returns
    ///
    /// Tensor of probabilities in `[0, 1]`, one value per batch item.
    ///
    /// # Errors
    ///
    /// Returns an error if the input shape does not match the model or the
    /// evaluation fails.
    fn forward(&self, input: &Tensor) -> candle_core::Result<Tensor>;
}
