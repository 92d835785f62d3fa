//! Cancer Predict Adapters - External adapters for cancer-predict.
//!
//! This crate provides the model provider: locating the classifier weights
//! on disk and loading them into a shareable handle.

pub mod models;

pub use models::{default_model_path, load_model, models_dir, MODEL_FILENAME};
