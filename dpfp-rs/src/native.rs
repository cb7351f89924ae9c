use crate::{Backend, DeviceId, DeviceInfo, DpfpError};
use dpfp_sys::{GUID, HRESULT, S_OK, ULONG};
use tracing::{debug, warn};
use windows_sys::Win32::System::Com::StringFromGUID2;

/// Characters `StringFromGUID2` needs, terminator included.
const GUID_TEXT_CAPACITY: usize = crate::DEVICE_ID_TEXT_LEN + 1;

fn failed(result: HRESULT) -> bool {
    result < 0
}

/// The DigitalPersona runtime (`DPFPApi.dll`).
#[derive(Debug, Default)]
pub struct Native {
    _private: (),
}

impl Native {
    pub fn new() -> Self {
        Native::default()
    }
}

impl Backend for Native {
    fn init(&mut self) -> crate::Result<()> {
        let res = unsafe { dpfp_sys::DPFPInit() };
        debug!(code = res, "DPFPInit");

        if res == S_OK {
            Ok(())
        } else {
            Err(DpfpError::InitError(res))
        }
    }

    fn enumerate_devices(&mut self) -> crate::Result<Vec<DeviceId>> {
        let mut count: ULONG = 0;
        let mut uids: *mut GUID = std::ptr::null_mut();
        let res = unsafe { dpfp_sys::DPFPEnumerateDevices(&mut count, &mut uids) };
        let buffer = DeviceBuffer::new(uids);
        debug!(code = res, count, "DPFPEnumerateDevices");

        if failed(res) {
            warn!(code = res, "device enumeration failed");
            return Err(DpfpError::EnumerateError(res));
        }

        unsafe { crate::device_id::device_ids_from_raw(buffer.inner, count as usize) }
    }

    fn device_info(&mut self, id: &DeviceId) -> crate::Result<DeviceInfo> {
        let mut info = dpfp_sys::DP_DEVICE_INFO::default();
        let res = unsafe { dpfp_sys::DPFPGetDeviceInfo(id.as_raw(), &mut info) };
        debug!(code = res, device = %id, "DPFPGetDeviceInfo");

        if res != S_OK {
            return Err(DpfpError::DeviceInfoError(res));
        }

        Ok(DeviceInfo::from(&info))
    }

    fn device_id_text(&self, id: &DeviceId) -> crate::Result<String> {
        let raw = id.as_raw();
        let guid = windows_sys::core::GUID {
            data1: raw.Data1,
            data2: raw.Data2,
            data3: raw.Data3,
            data4: raw.Data4,
        };
        let mut text = [0u16; GUID_TEXT_CAPACITY];
        let written =
            unsafe { StringFromGUID2(&guid, text.as_mut_ptr(), GUID_TEXT_CAPACITY as i32) };

        if written <= 0 {
            return Err(DpfpError::GuidToString);
        }

        Ok(crate::device_info::from_wide(&text))
    }

    fn terminate(&mut self) {
        debug!("DPFPTerm");
        unsafe { dpfp_sys::DPFPTerm() };
    }
}

/// Identifier array allocated by `DPFPEnumerateDevices`, released on drop.
struct DeviceBuffer {
    inner: *mut GUID,
}

impl DeviceBuffer {
    fn new(inner: *mut GUID) -> Self {
        DeviceBuffer { inner }
    }
}

impl Drop for DeviceBuffer {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe { dpfp_sys::DPFPBufferFree(self.inner as *mut dpfp_sys::c_void) };
        }
    }
}
