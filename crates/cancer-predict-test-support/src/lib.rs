//! Test support utilities for cancer-predict.
//!
//! Provides classifier mocks and synthetic JPEG builders for testing the
//! prediction pipeline and the HTTP surface.
//!
//! # Example
//!
//! ```
//! use cancer_predict_test_support::{MockClassifier, SyntheticJpegBuilder};
//!
//! let body = SyntheticJpegBuilder::rgb(640, 480);
//! let model = MockClassifier::fixed(0.73);
//! assert_eq!(model.call_count(), 0);
//! assert!(!body.is_empty());
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticJpegBuilder;
pub use mocks::MockClassifier;
