//! Binary cancer classifier.
//!
//! A compact CNN that consumes the normalized `(1, 224, 224, 3)` tensor and
//! emits a single sigmoid probability for the positive class.

use candle_core::{Module, Tensor, D};
use candle_nn::{conv2d, linear, Conv2d, Conv2dConfig, Linear, VarBuilder};

use crate::domain::INPUT_CHANNELS;
use crate::ports::Classifier;

/// Cancer classifier model.
///
/// Architecture: 3 conv blocks (conv, ReLU, 2x2 max pool), global average
/// pooling, then 2 FC layers.
/// Input: `(batch, 224, 224, 3)` raw RGB values in channel-last layout
/// Output: `(batch, 1)` probability of cancer
pub struct CancerClassifier {
    conv1: Conv2d,
    conv2: Conv2d,
    conv3: Conv2d,
    fc1: Linear,
    fc2: Linear,
}

impl CancerClassifier {
    /// Creates a classifier from weights.
    ///
    /// Expected tensor names: `conv{1,2,3}.{weight,bias}`, `fc{1,2}.{weight,bias}`.
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is missing or has the wrong shape.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(vb: VarBuilder) -> candle_core::Result<Self> {
        let padded = Conv2dConfig {
            padding: 1,
            ..Conv2dConfig::default()
        };
        let strided = Conv2dConfig {
            padding: 1,
            stride: 2,
            ..Conv2dConfig::default()
        };

        // 224 -> 112 (stride) -> 56 (pool)
        let conv1 = conv2d(INPUT_CHANNELS, 16, 3, strided, vb.pp("conv1"))?;
        // 56 -> 28
        let conv2 = conv2d(16, 32, 3, padded, vb.pp("conv2"))?;
        // 28 -> 14
        let conv3 = conv2d(32, 64, 3, padded, vb.pp("conv3"))?;

        let fc1 = linear(64, 32, vb.pp("fc1"))?;
        let fc2 = linear(32, 1, vb.pp("fc2"))?;

        Ok(Self {
            conv1,
            conv2,
            conv3,
            fc1,
            fc2,
        })
    }
}

impl Module for CancerClassifier {
    /// Returns raw logits of shape `(batch, 1)`.
    fn forward(&self, x: &Tensor) -> candle_core::Result<Tensor> {
        let (_, _, _, channels) = x.dims4()?;
        if channels != INPUT_CHANNELS {
            candle_core::bail!("expected {INPUT_CHANNELS} input channels, got {channels}");
        }

        // NHWC -> NCHW
        let x = x.permute((0, 3, 1, 2))?.contiguous()?;

        let x = self.conv1.forward(&x)?.relu()?.max_pool2d(2)?;
        let x = self.conv2.forward(&x)?.relu()?.max_pool2d(2)?;
        let x = self.conv3.forward(&x)?.relu()?.max_pool2d(2)?;

        // Global average pool over H and W
        let x = x.mean(D::Minus1)?.mean(D::Minus1)?;

        let x = self.fc1.forward(&x)?.relu()?;
        self.fc2.forward(&x)
    }
}

impl Classifier for CancerClassifier {
    fn name(&self) -> &'static str {
        "cancer-cnn"
    }

    fn forward(&self, input: &Tensor) -> candle_core::Result<Tensor> {
        let logits = Module::forward(self, input)?;
        candle_nn::ops::sigmoid(&logits)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use candle_core::{DType, Device};
    use std::sync::Arc;

    fn zero_model() -> CancerClassifier {
        let vb = VarBuilder::zeros(DType::F32, &Device::Cpu);
        CancerClassifier::new(vb).expect("zero weights build")
    }

    fn input(channels: usize) -> Tensor {
        Tensor::ones((1, 224, 224, channels), DType::F32, &Device::Cpu).unwrap()
    }

    #[test]
    fn test_output_shape_is_single_probability() {
        let model = zero_model();
        let out = Classifier::forward(&model, &input(3)).unwrap();
        assert_eq!(out.dims(), &[1, 1]);
    }

    #[test]
    fn test_zero_weights_yield_even_odds() {
        let model = zero_model();
        let out = Classifier::forward(&model, &input(3)).unwrap();
        let p = out.flatten_all().unwrap().to_vec1::<f32>().unwrap()[0];
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_wrong_channel_count() {
        let model = zero_model();
        assert!(Classifier::forward(&model, &input(1)).is_err());
    }

    #[test]
    fn test_rejects_wrong_rank() {
        let model = zero_model();
        let flat = Tensor::ones((224, 224, 3), DType::F32, &Device::Cpu).unwrap();
        assert!(Classifier::forward(&model, &flat).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let model: Arc<dyn Classifier> = Arc::new(zero_model());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let model = Arc::clone(&model);
                std::thread::spawn(move || model.forward(&input(3)).map(|t| t.dims().to_vec()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), vec![1, 1]);
        }
    }
}
