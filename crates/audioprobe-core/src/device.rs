use std::fmt;

use serde::{Deserialize, Serialize};

/// Which class of devices a query targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceMode {
    /// Render/playback devices (sinks).
    Output,
    /// Capture/recording devices (sources).
    Input,
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceMode::Output => f.write_str("output"),
            DeviceMode::Input => f.write_str("input"),
        }
    }
}

/// A single enumerated audio device.
///
/// `name` is the durable, backend-specific identifier that can be used to
/// re-select the same device in a later call. `readable_name` is a
/// human-presentable label and may equal `name` on backends that expose no
/// separate display name. Devices are compared by raw string equality of
/// `name`; no normalization is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub readable_name: String,
}

impl DeviceInfo {
    pub fn new(name: impl Into<String>, readable_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readable_name: readable_name.into(),
        }
    }
}
