//! Cancer Predict Server - HTTP surface for the prediction pipeline.
//!
//! Exposes `POST /predict` and `GET /health`, maps every outcome to the
//! JSON envelope defined in `cancer_predict_core::response`, and owns the
//! process concerns: CLI, layered configuration and logging.

pub mod app;
pub mod cli;
pub mod config;
pub mod response;
pub mod routes;
pub mod state;

pub use app::router;
pub use state::{AppState, SharedState};
