//! Cross-platform audio device enumeration
//!
//! Exposes three queries — `default_input_device`, `default_output_device`
//! and `fetch_devices` — backed by exactly one platform backend selected at
//! build time:
//!
//! - Linux: PulseAudio (`audioprobe-pulse`)
//! - Windows: Core Audio / MMDevice (`audioprobe-wasapi`)
//! - everywhere else: cpal (`audioprobe-cpal`)
//!
//! Each call opens and tears down its own connection to the platform audio
//! subsystem; no state is cached between calls.

pub use audioprobe_core::{DeviceError, DeviceInfo, DeviceMode, DEFAULT_QUERY_TIMEOUT};

#[cfg(target_os = "linux")]
pub use audioprobe_pulse::{
    default_device_with_timeout, default_input_device, default_output_device, fetch_devices,
    fetch_devices_with_timeout,
};

#[cfg(target_os = "windows")]
pub use audioprobe_wasapi::{default_input_device, default_output_device, fetch_devices};

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
pub use audioprobe_cpal::{default_input_device, default_output_device, fetch_devices};
