//! Core domain types for cancer classification.

mod classification;
mod confidence;
mod error;
mod tensor;

pub use classification::{ClassificationResult, Verdict};
pub use confidence::ConfidenceScore;
pub use error::InputError;
pub use tensor::{NormalizedTensor, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
