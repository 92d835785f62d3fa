//! Device selection for inference.

use candle_core::Device;
use tracing::info;

/// Picks the device the classifier runs on.
///
/// GPU backends exist only in builds with the `metal` or `cuda` feature.
/// Without them, or on a host with no usable GPU, the CPU is used.
#[must_use]
pub fn get_device() -> Device {
    let device = gpu_device().unwrap_or(Device::Cpu);
    info!(device = device_name(&device), "Inference device selected");
    device
}

/// Short device name for logs and health reports.
#[must_use]
pub fn device_name(device: &Device) -> &'static str {
    match device {
        Device::Cpu => "cpu",
        Device::Cuda(_) => "cuda",
        Device::Metal(_) => "metal",
    }
}

#[allow(clippy::unnecessary_wraps)]
fn gpu_device() -> Option<Device> {
    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => return Some(device),
            Err(e) => tracing::debug!("Metal device unavailable: {e}"),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => return Some(device),
            Err(e) => tracing::debug!("CUDA device unavailable: {e}"),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    fn test_cpu_only_build_selects_cpu() {
        let device = get_device();
        assert!(matches!(device, Device::Cpu));
        assert_eq!(device_name(&device), "cpu");
    }

    #[test]
    fn test_device_name_cpu() {
        assert_eq!(device_name(&Device::Cpu), "cpu");
    }
}
