//! Application state shared by all request handlers.

use std::sync::Arc;
use std::time::Instant;

use cancer_predict_core::Classifier;
use candle_core::Device;

/// Shared application state.
///
/// Built once at startup and never mutated afterwards; handlers only read it.
pub struct AppState {
    /// The loaded model.
    pub classifier: Arc<dyn Classifier>,
    /// Device input tensors are allocated on.
    pub device: Device,
    /// Server start time
    pub started_at: Instant,
}

/// Handle passed to axum handlers.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Creates the state around a loaded model.
    #[must_use]
    pub fn new(classifier: Arc<dyn Classifier>, device: Device) -> Self {
        Self {
            classifier,
            device,
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
