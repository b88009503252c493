//! Windows Core Audio device enumeration backend
//!
//! Walks the MMDevice active-endpoint collection through the `wasapi` crate,
//! which owns the COM handle lifetimes. Only compiled on Windows; other
//! platforms get an empty crate.

#[cfg(target_os = "windows")]
mod device;

pub use audioprobe_core::{DeviceError, DeviceInfo, DeviceMode};

#[cfg(target_os = "windows")]
pub use device::{default_input_device, default_output_device, fetch_devices};
