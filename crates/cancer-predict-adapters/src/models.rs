//! Model provider adapter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use cancer_predict_core::inference::{load_safetensors, CancerClassifier};
use cancer_predict_core::Classifier;
use candle_core::Device;
use tracing::info;

/// Filename of the classifier weights inside the models directory.
pub const MODEL_FILENAME: &str = "cancer-classifier.safetensors";

/// Returns the models directory path.
///
/// Uses `XDG_DATA_HOME/cancer-predict/models` or
/// `~/.local/share/cancer-predict/models`.
#[must_use]
pub fn models_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cancer-predict")
        .join("models")
}

/// Returns the default location of the classifier weights.
#[must_use]
pub fn default_model_path() -> PathBuf {
    models_dir().join(MODEL_FILENAME)
}

/// Loads the classifier once, for sharing across requests.
///
/// # Errors
///
/// Returns an error if the file does not exist, is not a valid safetensors
/// checkpoint, or does not contain the classifier's weights.
pub fn load_model(path: impl AsRef<Path>, device: &Device) -> Result<Arc<dyn Classifier>> {
    let path = path.as_ref();
    if !path.is_file() {
        anyhow::bail!("Model file not found: {}", path.display());
    }

    let vb = load_safetensors(path, device)?;
    let model = CancerClassifier::new(vb)
        .with_context(|| format!("Incompatible model weights: {}", path.display()))?;

    info!("Loaded model {} from {}", model.name(), path.display());
    Ok(Arc::new(model))
}
