use wasapi::{DeviceCollection, Direction};

use audioprobe_core::{DeviceError, DeviceInfo, DeviceMode};

/// COM apartment scope for one query.
///
/// Initialized on construction, uninitialized on drop, so the apartment is
/// torn down on every exit path including early failures.
struct ComGuard;

impl ComGuard {
    fn initialize() -> Result<Self, DeviceError> {
        wasapi::initialize_mta()
            .ok()
            .map_err(|e| DeviceError::Unavailable(e.to_string()))?;
        Ok(Self)
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        wasapi::deinitialize();
    }
}

/// Get the default capture endpoint.
pub fn default_input_device() -> Result<DeviceInfo, DeviceError> {
    default_device(DeviceMode::Input)
}

/// Get the default render endpoint.
pub fn default_output_device() -> Result<DeviceInfo, DeviceError> {
    default_device(DeviceMode::Output)
}

/// List all active endpoints of the requested class.
///
/// An endpoint whose ID or friendly name cannot be read is skipped without
/// aborting the rest of the enumeration.
pub fn fetch_devices(mode: DeviceMode) -> Result<Vec<DeviceInfo>, DeviceError> {
    let _com = ComGuard::initialize()?;

    let collection = DeviceCollection::new(&direction(mode))
        .map_err(|e| DeviceError::Unavailable(e.to_string()))?;
    let count = collection
        .get_nbr_devices()
        .map_err(|e| DeviceError::Backend(e.to_string()))?;

    let mut result = Vec::with_capacity(count as usize);
    for index in 0..count {
        let device = match collection.get_device_at_index(index) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("Skipping {} endpoint {}: {}", mode, index, e);
                continue;
            }
        };

        match device_info(&device) {
            Ok(info) => result.push(info),
            Err(e) => tracing::warn!("Skipping {} endpoint {}: {}", mode, index, e),
        }
    }

    Ok(result)
}

fn default_device(mode: DeviceMode) -> Result<DeviceInfo, DeviceError> {
    let _com = ComGuard::initialize()?;

    let device = wasapi::get_default_device(&direction(mode)).map_err(|e| {
        tracing::debug!("No default {} endpoint: {}", mode, e);
        DeviceError::NoDefaultDevice(mode)
    })?;

    device_info(&device)
}

// Endpoint ID is the durable identifier; the friendly name comes from the
// endpoint's property store.
fn device_info(device: &wasapi::Device) -> Result<DeviceInfo, DeviceError> {
    let id = device
        .get_id()
        .map_err(|e| DeviceError::Backend(e.to_string()))?;
    let friendly_name = device
        .get_friendlyname()
        .map_err(|e| DeviceError::Backend(e.to_string()))?;
    Ok(DeviceInfo::new(id, friendly_name))
}

fn direction(mode: DeviceMode) -> Direction {
    match mode {
        DeviceMode::Output => Direction::Render,
        DeviceMode::Input => Direction::Capture,
    }
}
