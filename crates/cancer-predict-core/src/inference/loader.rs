//! Weight loading for safetensors checkpoints.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use safetensors::{Dtype, SafeTensors};
use tracing::debug;

/// Reads a safetensors checkpoint into a `VarBuilder` on `device`.
///
/// Floating point tensors of any width are accepted and widened to `f32`,
/// the precision the classifier runs in.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The safetensors header or data is invalid
/// - A tensor has a non floating point dtype
pub fn load_safetensors(path: impl AsRef<Path>, device: &Device) -> Result<VarBuilder<'static>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read weights: {}", path.display()))?;
    let checkpoint = SafeTensors::deserialize(&bytes)
        .with_context(|| format!("Invalid safetensors file: {}", path.display()))?;

    let mut weights = HashMap::new();
    for (name, view) in checkpoint.tensors() {
        let dtype = float_dtype(view.dtype())
            .with_context(|| format!("Tensor '{name}' in {}", path.display()))?;
        let tensor = Tensor::from_raw_buffer(view.data(), dtype, view.shape(), device)
            .and_then(|t| t.to_dtype(DType::F32))
            .with_context(|| format!("Failed to materialize tensor '{name}'"))?;
        weights.insert(name, tensor);
    }

    debug!("Loaded {} tensors from {}", weights.len(), path.display());
    Ok(VarBuilder::from_tensors(weights, DType::F32, device))
}

fn float_dtype(dtype: Dtype) -> Result<DType> {
    match dtype {
        Dtype::F32 => Ok(DType::F32),
        Dtype::F16 => Ok(DType::F16),
        Dtype::BF16 => Ok(DType::BF16),
        Dtype::F64 => Ok(DType::F64),
        other => anyhow::bail!("expected floating point weights, found {other:?}"),
    }
}
