//! Per-query connection to the PulseAudio daemon.
//!
//! A [`Session`] owns a standard mainloop and a client context for the
//! duration of a single query. The context is disconnected on drop, so every
//! exit path (success, failure, timeout) tears the connection down.

use std::thread;
use std::time::{Duration, Instant};

use libpulse_binding::context::introspect::Introspector;
use libpulse_binding::context::{Context, FlagSet, State as ContextState};
use libpulse_binding::mainloop::standard::{IterateResult, Mainloop};
use libpulse_binding::operation::{Operation, State as OperationState};

use audioprobe_core::DeviceError;

/// Sleep between mainloop iterations that dispatched nothing.
///
/// The mainloop is iterated in non-blocking mode so the query deadline can
/// fire even when the daemon never produces another event.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub(crate) struct Session {
    mainloop: Mainloop,
    context: Context,
    timeout: Duration,
    deadline: Instant,
}

impl Session {
    /// Open a connection to the default PulseAudio server.
    ///
    /// The returned session enforces `timeout` across all operations run on
    /// it, connection handshake included.
    pub(crate) fn connect(timeout: Duration) -> Result<Self, DeviceError> {
        let mainloop = Mainloop::new().ok_or_else(|| {
            DeviceError::Unavailable("failed to create PulseAudio mainloop".to_string())
        })?;

        let mut context = Context::new(&mainloop, "audioprobe").ok_or_else(|| {
            DeviceError::Unavailable("failed to create PulseAudio context".to_string())
        })?;

        context
            .connect(None, FlagSet::NOFLAGS, None)
            .map_err(|e| DeviceError::Unavailable(format!("{e}")))?;

        Ok(Self {
            mainloop,
            context,
            timeout,
            deadline: Instant::now() + timeout,
        })
    }

    /// Drive the mainloop until one introspection operation completes.
    ///
    /// `start` is invoked exactly once, the first time the context reaches
    /// the ready state. The loop then polls the operation until it is done,
    /// cancelled, or the session deadline expires.
    pub(crate) fn run_operation<P, F>(&mut self, start: F) -> Result<(), DeviceError>
    where
        P: ?Sized,
        F: FnOnce(&Introspector) -> Operation<P>,
    {
        let introspector = self.context.introspect();
        let mut start = Some(start);
        let mut operation: Option<Operation<P>> = None;

        loop {
            if Instant::now() >= self.deadline {
                return Err(DeviceError::Timeout(self.timeout));
            }

            match self.mainloop.iterate(false) {
                IterateResult::Quit(_) => {
                    return Err(DeviceError::Backend(
                        "mainloop quit during device query".to_string(),
                    ));
                }
                IterateResult::Err(e) => return Err(DeviceError::Backend(format!("{e}"))),
                IterateResult::Success(dispatched) => {
                    if dispatched == 0 {
                        thread::sleep(POLL_INTERVAL);
                    }
                }
            }

            match self.context.get_state() {
                ContextState::Unconnected
                | ContextState::Connecting
                | ContextState::Authorizing
                | ContextState::SettingName => continue,
                ContextState::Failed => {
                    return Err(DeviceError::Unavailable(
                        "PulseAudio connection failed".to_string(),
                    ));
                }
                ContextState::Terminated => {
                    return Err(DeviceError::Unavailable(
                        "PulseAudio connection terminated".to_string(),
                    ));
                }
                ContextState::Ready => {}
            }

            if let Some(start) = start.take() {
                operation = Some(start(&introspector));
                continue;
            }

            if let Some(op) = &operation {
                match op.get_state() {
                    OperationState::Running => {}
                    OperationState::Done => return Ok(()),
                    OperationState::Cancelled => {
                        return Err(DeviceError::Backend(
                            "introspection operation cancelled".to_string(),
                        ));
                    }
                }
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.context.disconnect();
    }
}
