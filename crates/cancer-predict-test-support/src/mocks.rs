//! Mock implementations of core port traits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cancer_predict_core::Classifier;
use candle_core::Tensor;

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Fixed(f32),
    Fail,
}

/// Mock implementation of `Classifier` for testing.
///
/// Returns a preset probability (or fails) and counts forward passes, so
/// tests can assert whether the model was reached at all.
#[derive(Clone)]
pub struct MockClassifier {
    behavior: Behavior,
    calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    /// Creates a mock that always outputs `probability`.
    #[must_use]
    pub fn fixed(probability: f32) -> Self {
        Self {
            behavior: Behavior::Fixed(probability),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a mock whose forward pass always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the number of forward passes so far, across clones.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for MockClassifier {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn forward(&self, input: &Tensor) -> candle_core::Result<Tensor> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (batch, _, _, _) = input.dims4()?;
        match self.behavior {
            Behavior::Fixed(p) => Tensor::from_vec(vec![p; batch], (batch, 1), input.device()),
            Behavior::Fail => candle_core::bail!("mock classifier failure"),
        }
    }
}
