//! An in-process stand-in for the DigitalPersona runtime.
//!
//! `Simulated` serves a fixed set of readers and can be scripted to report no
//! readers for a number of enumerations or to fail any of the runtime calls.
//! Every call is written to a `Journal` shared with the caller, so the call
//! sequence can still be inspected after the owning `Session` is gone.

use crate::{Backend, DeviceId, DeviceInfo, DpfpError, Modality, Technology, Version};
use dpfp_sys::HRESULT;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// `E_FAIL`, returned for injected failures unless a code is given.
pub const E_FAIL: HRESULT = 0x8000_4005_u32 as i32 as HRESULT;

const SIMULATED_ID_BASE: u128 = 0x0D1C_5000_0000_4000_8000_0000_0000_0000;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Call {
    Init,
    Enumerate,
    DeviceInfo(DeviceId),
    DeviceIdText(DeviceId),
    Terminate,
}

#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Call>>>);

impl Journal {
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    /// Number of recorded calls matching `call`.
    pub fn count(&self, call: &Call) -> usize {
        self.0.borrow().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }
}

#[derive(Debug, Default)]
pub struct Simulated {
    devices: Vec<(DeviceId, DeviceInfo)>,
    empty_enumerations: usize,
    init_error: Option<HRESULT>,
    enumerate_error: Option<HRESULT>,
    info_error: Option<HRESULT>,
    unprintable: Vec<DeviceId>,
    journal: Journal,
}

impl Simulated {
    pub fn new() -> Self {
        Simulated::default()
    }

    /// `count` readers with generated identifiers and descriptions.
    pub fn with_devices(count: usize) -> Self {
        (0..count).fold(Simulated::new(), |simulated, index| {
            let id = DeviceId::from_u128(SIMULATED_ID_BASE + index as u128);
            let info = DeviceInfo::new(
                &format!("SIM{:08}", index + 1),
                "U.are.U 4500 Fingerprint Reader (simulated)",
                "DigitalPersona, Inc.",
            )
            .with_language_id(0x0409)
            .with_firmware(Version::new(1, 0, index as u32))
            .with_hardware(Version::new(1, 0, 0))
            .with_modality(Modality::Area)
            .with_technology(Technology::Optical);

            simulated.device(id, info)
        })
    }

    pub fn device(mut self, id: DeviceId, info: DeviceInfo) -> Self {
        self.devices.push((id, info));
        self
    }

    /// The first `count` enumerations report no readers at all.
    pub fn empty_enumerations(mut self, count: usize) -> Self {
        self.empty_enumerations = count;
        self
    }

    pub fn fail_init(mut self, code: HRESULT) -> Self {
        self.init_error = Some(code);
        self
    }

    pub fn fail_enumeration(mut self, code: HRESULT) -> Self {
        self.enumerate_error = Some(code);
        self
    }

    pub fn fail_device_info(mut self, code: HRESULT) -> Self {
        self.info_error = Some(code);
        self
    }

    /// Text conversion of `id` fails.
    pub fn fail_id_text(mut self, id: DeviceId) -> Self {
        self.unprintable.push(id);
        self
    }

    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }
}

impl Backend for Simulated {
    fn init(&mut self) -> crate::Result<()> {
        self.journal.record(Call::Init);

        match self.init_error {
            Some(code) => Err(DpfpError::InitError(code)),
            None => Ok(()),
        }
    }

    fn enumerate_devices(&mut self) -> crate::Result<Vec<DeviceId>> {
        self.journal.record(Call::Enumerate);

        if let Some(code) = self.enumerate_error {
            return Err(DpfpError::EnumerateError(code));
        }

        if self.empty_enumerations > 0 {
            self.empty_enumerations -= 1;
            debug!(remaining = self.empty_enumerations, "simulating an empty enumeration");
            return Ok(Vec::new());
        }

        Ok(self.devices.iter().map(|(id, _)| *id).collect())
    }

    fn device_info(&mut self, id: &DeviceId) -> crate::Result<DeviceInfo> {
        self.journal.record(Call::DeviceInfo(*id));

        if let Some(code) = self.info_error {
            return Err(DpfpError::DeviceInfoError(code));
        }

        self.devices
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, info)| info.clone())
            .ok_or(DpfpError::DeviceInfoError(E_FAIL))
    }

    fn device_id_text(&self, id: &DeviceId) -> crate::Result<String> {
        self.journal.record(Call::DeviceIdText(*id));

        if self.unprintable.contains(id) {
            Err(DpfpError::GuidToString)
        } else {
            Ok(id.to_string())
        }
    }

    fn terminate(&mut self) {
        self.journal.record(Call::Terminate);
    }
}
