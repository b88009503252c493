//! Core types shared by all audioprobe backends.
//!
//! Each backend exposes the same three free functions
//! (`default_input_device`, `default_output_device`, `fetch_devices`) built
//! on the types defined here. Exactly one backend is compiled into a
//! consumer per target platform.

mod device;
mod error;

use std::time::Duration;

pub use device::{DeviceInfo, DeviceMode};
pub use error::DeviceError;

/// Upper bound on a single device query.
///
/// Backends that poll a native event loop (PulseAudio) enforce this deadline
/// so an unresponsive daemon fails with [`DeviceError::Timeout`] instead of
/// blocking the caller indefinitely.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_is_bounded() {
        // Long enough for a slow daemon handshake, short enough that a hung
        // subsystem surfaces as an error rather than a frozen caller.
        assert!(DEFAULT_QUERY_TIMEOUT >= Duration::from_secs(1));
        assert!(DEFAULT_QUERY_TIMEOUT <= Duration::from_secs(30));
    }
}
