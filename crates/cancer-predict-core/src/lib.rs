//! Cancer Predict Core - Domain logic and inference pipeline
//!
//! This crate contains the domain types, the classifier port, the CNN used
//! for scoring, the decode → score → decide pipeline and the response
//! envelope mapping shared by every transport.

pub mod domain;
pub mod inference;
pub mod pipeline;
pub mod ports;
pub mod response;

pub use domain::{ClassificationResult, ConfidenceScore, InputError, NormalizedTensor, Verdict};
pub use pipeline::{confidence_score, determine_result, predict_classification, preprocess_image};
pub use ports::Classifier;
pub use response::{Envelope, EnvelopeStatus, Fault, ResponseMapper, MAX_PAYLOAD_BYTES};
