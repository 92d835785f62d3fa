//! Normalized model input.

use candle_core::Tensor;

/// Model input height in pixels.
pub const INPUT_HEIGHT: usize = 224;
/// Model input width in pixels.
pub const INPUT_WIDTH: usize = 224;
/// Model input channel count (RGB).
pub const INPUT_CHANNELS: usize = 3;

/// A batch-of-one image tensor of shape `(1, 224, 224, 3)`.
///
/// Only the preprocessing stage constructs this type, so the shape holds for
/// every value in circulation.
#[derive(Debug, Clone)]
pub struct NormalizedTensor(Tensor);

impl NormalizedTensor {
    /// The fixed shape of every normalized tensor.
    pub const SHAPE: [usize; 4] = [1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS];

    pub(crate) const fn new(tensor: Tensor) -> Self {
        Self(tensor)
    }

    /// Returns the tensor dimensions.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        self.0.dims()
    }

    /// Borrows the underlying tensor.
    #[must_use]
    pub const fn as_tensor(&self) -> &Tensor {
        &self.0
    }

    /// Consumes the wrapper, returning the tensor.
    #[must_use]
    pub fn into_inner(self) -> Tensor {
        self.0
    }
}
