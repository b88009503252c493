use std::time::Duration;

use thiserror::Error;

use crate::device::DeviceMode;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Audio subsystem unavailable: {0}")]
    Unavailable(String),

    #[error("No default {0} device configured")]
    NoDefaultDevice(DeviceMode),

    #[error("Device not found: {0}")]
    NotFound(String),

    #[error("Device query timed out after {0:?}")]
    Timeout(Duration),

    #[error("Backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_default_device_names_the_mode() {
        let err = DeviceError::NoDefaultDevice(DeviceMode::Input);
        assert_eq!(err.to_string(), "No default input device configured");
    }

    #[test]
    fn test_timeout_reports_the_duration() {
        let err = DeviceError::Timeout(Duration::from_secs(5));
        assert!(err.to_string().contains("5s"));
    }
}
