//! Portable device enumeration backend
//!
//! Stateless pass-through to cpal's default host. Used on every platform
//! that has no dedicated backend (notably macOS).

mod device;

pub use audioprobe_core::{DeviceError, DeviceInfo, DeviceMode};
pub use device::{default_input_device, default_output_device, fetch_devices};
