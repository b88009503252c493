use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use libpulse_binding::callbacks::ListResult;

use audioprobe_core::{DeviceError, DeviceInfo, DeviceMode, DEFAULT_QUERY_TIMEOUT};

use crate::session::Session;

/// Get the default capture device (PulseAudio source).
pub fn default_input_device() -> Result<DeviceInfo, DeviceError> {
    default_device_with_timeout(DeviceMode::Input, DEFAULT_QUERY_TIMEOUT)
}

/// Get the default playback device (PulseAudio sink).
pub fn default_output_device() -> Result<DeviceInfo, DeviceError> {
    default_device_with_timeout(DeviceMode::Output, DEFAULT_QUERY_TIMEOUT)
}

/// List all devices of the requested class, in server-reported order.
pub fn fetch_devices(mode: DeviceMode) -> Result<Vec<DeviceInfo>, DeviceError> {
    fetch_devices_with_timeout(mode, DEFAULT_QUERY_TIMEOUT)
}

/// Get the default device of `mode` with a caller-supplied deadline.
///
/// Runs two operations serially on one connection: a server-info query to
/// learn the default sink/source name, then an info-by-name lookup for that
/// device. A server with no configured default fails with
/// [`DeviceError::NoDefaultDevice`]; a default name the server can no longer
/// describe fails with [`DeviceError::NotFound`].
pub fn default_device_with_timeout(
    mode: DeviceMode,
    timeout: Duration,
) -> Result<DeviceInfo, DeviceError> {
    let mut session = Session::connect(timeout)?;

    let default_name: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let name_slot = Rc::clone(&default_name);

    session.run_operation(move |introspect| {
        introspect.get_server_info(move |info| {
            let name = match mode {
                DeviceMode::Input => info.default_source_name.as_deref(),
                DeviceMode::Output => info.default_sink_name.as_deref(),
            };
            *name_slot.borrow_mut() = name.map(str::to_string);
        })
    })?;

    let name = default_name
        .borrow()
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or(DeviceError::NoDefaultDevice(mode))?;

    let found: Rc<RefCell<Option<DeviceInfo>>> = Rc::new(RefCell::new(None));
    let found_slot = Rc::clone(&found);
    let target = name.clone();

    match mode {
        DeviceMode::Input => session.run_operation(move |introspect| {
            introspect.get_source_info_by_name(&target, move |list| match list {
                ListResult::Item(info) => {
                    *found_slot.borrow_mut() = Some(device_from_native(
                        info.name.as_deref(),
                        info.description.as_deref(),
                    ));
                }
                ListResult::End => {}
                ListResult::Error => {
                    tracing::warn!("PulseAudio reported an error describing the default source");
                }
            })
        })?,
        DeviceMode::Output => session.run_operation(move |introspect| {
            introspect.get_sink_info_by_name(&target, move |list| match list {
                ListResult::Item(info) => {
                    *found_slot.borrow_mut() = Some(device_from_native(
                        info.name.as_deref(),
                        info.description.as_deref(),
                    ));
                }
                ListResult::End => {}
                ListResult::Error => {
                    tracing::warn!("PulseAudio reported an error describing the default sink");
                }
            })
        })?,
    }

    let device = found.borrow_mut().take();
    device.ok_or(DeviceError::NotFound(name))
}

/// List devices of `mode` with a caller-supplied deadline.
///
/// The list callback is invoked once per device plus a final end-of-list
/// sentinel, which produces no record.
pub fn fetch_devices_with_timeout(
    mode: DeviceMode,
    timeout: Duration,
) -> Result<Vec<DeviceInfo>, DeviceError> {
    let mut session = Session::connect(timeout)?;

    let devices: Rc<RefCell<Vec<DeviceInfo>>> = Rc::new(RefCell::new(Vec::new()));
    let devices_slot = Rc::clone(&devices);

    match mode {
        DeviceMode::Input => session.run_operation(move |introspect| {
            introspect.get_source_info_list(move |list| match list {
                ListResult::Item(info) => {
                    devices_slot.borrow_mut().push(device_from_native(
                        info.name.as_deref(),
                        info.description.as_deref(),
                    ));
                }
                ListResult::End => {}
                ListResult::Error => {
                    tracing::warn!("PulseAudio reported an error while listing sources");
                }
            })
        })?,
        DeviceMode::Output => session.run_operation(move |introspect| {
            introspect.get_sink_info_list(move |list| match list {
                ListResult::Item(info) => {
                    devices_slot.borrow_mut().push(device_from_native(
                        info.name.as_deref(),
                        info.description.as_deref(),
                    ));
                }
                ListResult::End => {}
                ListResult::Error => {
                    tracing::warn!("PulseAudio reported an error while listing sinks");
                }
            })
        })?,
    }

    Ok(devices.take())
}

fn device_from_native(name: Option<&str>, description: Option<&str>) -> DeviceInfo {
    let name = name.unwrap_or_default();
    // Sources and sinks always carry a description; fall back to the
    // identifier if one ever arrives without.
    let readable = description.filter(|d| !d.is_empty()).unwrap_or(name);
    DeviceInfo::new(name, readable)
}
