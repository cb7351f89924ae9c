//! Low level bindings to the DigitalPersona device client API (`DPDevClt.h`).
//!
//! The runtime (`DPFPApi.dll`) is only distributed for Windows. On every other
//! target the data layout is still available, but the functions are not.
//!
//! The import library is looked up in `DPFP_LIB_DIR` or, failing that, in
//! `$DPFP_SDK_DIR/Lib/<arch>`.

#![warn(clippy::all)]
#![allow(bad_style)]

mod device;

pub use crate::device::*;

pub use libc::c_void;

pub type HRESULT = libc::c_long;
pub type ULONG = u32;
pub type WCHAR = u16;

pub const S_OK: HRESULT = 0;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct GUID {
    pub Data1: u32,
    pub Data2: u16,
    pub Data3: u16,
    pub Data4: [u8; 8],
}

#[cfg(windows)]
extern "system" {
    /// Opens the device client session. Must precede every other call.
    pub fn DPFPInit() -> HRESULT;

    /// Closes the session opened by `DPFPInit`.
    pub fn DPFPTerm();

    /// On success `ppDevUID` points to `*puDevCount` identifiers allocated by the
    /// runtime, which the caller releases with `DPFPBufferFree`.
    pub fn DPFPEnumerateDevices(puDevCount: *mut ULONG, ppDevUID: *mut *mut GUID) -> HRESULT;

    pub fn DPFPGetDeviceInfo(deviceUid: *const GUID, pDevInfo: *mut DP_DEVICE_INFO) -> HRESULT;

    pub fn DPFPBufferFree(p: *mut c_void);
}
