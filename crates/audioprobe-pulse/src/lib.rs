//! PulseAudio device enumeration backend
//!
//! Each query opens its own connection to the default server, runs one or
//! two introspection operations to completion under a bounded deadline, and
//! disconnects before returning. Only compiled on Linux; other platforms get
//! an empty crate.

#[cfg(target_os = "linux")]
mod device;
#[cfg(target_os = "linux")]
mod session;

pub use audioprobe_core::{DeviceError, DeviceInfo, DeviceMode, DEFAULT_QUERY_TIMEOUT};

#[cfg(target_os = "linux")]
pub use device::{
    default_device_with_timeout, default_input_device, default_output_device, fetch_devices,
    fetch_devices_with_timeout,
};
