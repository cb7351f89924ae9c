#![warn(clippy::all)]

mod backend;
mod device_id;
mod device_info;
mod errors;
#[cfg(windows)]
mod native;
pub mod simulated;

pub use crate::{backend::*, device_id::*, device_info::*, errors::*};

#[cfg(windows)]
pub use crate::native::Native;

use tracing::debug;

pub type Result<T> = std::result::Result<T, DpfpError>;

/// An open runtime session.
///
/// The runtime keeps a single implicit session, opened by `Session::open` and
/// closed when the `Session` is dropped. Keep exactly one alive at a time.
#[derive(Debug)]
pub struct Session<B: Backend> {
    backend: B,
}

#[cfg(windows)]
impl Session<Native> {
    /// Initialise the DigitalPersona runtime.
    pub fn new() -> crate::Result<Self> {
        Session::open(Native::new())
    }
}

impl<B: Backend> Session<B> {
    /// Initialises `backend`. If that fails, no session exists and nothing has to be terminated.
    pub fn open(mut backend: B) -> crate::Result<Self> {
        backend.init()?;
        debug!("session opened");

        Ok(Session { backend })
    }

    /// Scans for attached readers. This is the entry point into finding a reader to query.
    pub fn devices(&mut self) -> crate::Result<Vec<DeviceId>> {
        let devices = self.backend.enumerate_devices()?;
        debug!(count = devices.len(), "devices enumerated");

        Ok(devices)
    }

    pub fn device_info(&mut self, id: &DeviceId) -> crate::Result<DeviceInfo> {
        self.backend.device_info(id)
    }

    pub fn device_id_text(&self, id: &DeviceId) -> crate::Result<String> {
        self.backend.device_id_text(id)
    }
}

impl<B: Backend> Drop for Session<B> {
    fn drop(&mut self) {
        debug!("terminating session");
        self.backend.terminate();
    }
}
