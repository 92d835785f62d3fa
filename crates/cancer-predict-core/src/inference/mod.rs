//! ML inference engine using Candle.
//!
//! Provides device selection, safetensors weight loading and the CNN used to
//! score normalized images.

mod classifier;
mod device;
mod loader;

pub use classifier::CancerClassifier;
pub use device::{device_name, get_device};
pub use loader::load_safetensors;
