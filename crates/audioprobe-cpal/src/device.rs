use cpal::traits::{DeviceTrait, HostTrait};

use audioprobe_core::{DeviceError, DeviceInfo, DeviceMode};

/// Get the default capture device of the default host.
pub fn default_input_device() -> Result<DeviceInfo, DeviceError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or(DeviceError::NoDefaultDevice(DeviceMode::Input))?;
    device_info(&device)
}

/// Get the default playback device of the default host.
pub fn default_output_device() -> Result<DeviceInfo, DeviceError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(DeviceError::NoDefaultDevice(DeviceMode::Output))?;
    device_info(&device)
}

/// List all devices of the requested class, in host-reported order.
///
/// Devices whose name cannot be read are skipped rather than failing the
/// whole enumeration.
pub fn fetch_devices(mode: DeviceMode) -> Result<Vec<DeviceInfo>, DeviceError> {
    let host = cpal::default_host();

    let devices = match mode {
        DeviceMode::Input => host.input_devices(),
        DeviceMode::Output => host.output_devices(),
    }
    .map_err(|e| DeviceError::Unavailable(e.to_string()))?;

    let mut result = Vec::new();
    for device in devices {
        match device.name() {
            Ok(name) => result.push(DeviceInfo::new(name.clone(), name)),
            Err(e) => {
                tracing::warn!("Skipping {} device with unreadable name: {}", mode, e);
            }
        }
    }

    Ok(result)
}

// cpal exposes a single name per device, so both fields carry it.
fn device_info(device: &cpal::Device) -> Result<DeviceInfo, DeviceError> {
    let name = device
        .name()
        .map_err(|e| DeviceError::Backend(e.to_string()))?;
    Ok(DeviceInfo::new(name.clone(), name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_devices_reports_both_fields() {
        // Environment-dependent: hosts without audio hardware legitimately
        // report an empty list.
        let devices = fetch_devices(DeviceMode::Output).unwrap_or_default();
        for d in &devices {
            assert_eq!(d.name, d.readable_name);
            assert!(!d.name.is_empty());
        }
    }

    #[test]
    fn test_default_output_appears_in_fetched_list() {
        let default = match default_output_device() {
            Ok(d) => d,
            // No default device on this host; nothing to cross-check.
            Err(DeviceError::NoDefaultDevice(_)) | Err(DeviceError::Backend(_)) => return,
            Err(e) => panic!("unexpected error: {e}"),
        };

        let devices = fetch_devices(DeviceMode::Output).expect("default exists, list must too");
        let matches = devices.iter().filter(|d| d.name == default.name).count();
        assert!(matches >= 1, "default device missing from device list");
    }

    #[test]
    fn test_fetch_devices_is_stable_across_calls() {
        let mut first: Vec<String> = fetch_devices(DeviceMode::Input)
            .unwrap_or_default()
            .into_iter()
            .map(|d| d.name)
            .collect();
        let mut second: Vec<String> = fetch_devices(DeviceMode::Input)
            .unwrap_or_default()
            .into_iter()
            .map(|d| d.name)
            .collect();

        first.sort();
        second.sort();
        assert_eq!(first, second);
    }
}
