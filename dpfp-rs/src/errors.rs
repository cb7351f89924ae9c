use dpfp_sys::HRESULT;
use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum DpfpError {
    #[fail(display = "Fail on init. DPFP error code: {}", _0)]
    InitError(HRESULT),
    #[fail(display = "Failed to enumerate devices. DPFP error code: {}", _0)]
    EnumerateError(HRESULT),
    #[fail(display = "Failed to get device info. DPFP error code: {}", _0)]
    DeviceInfoError(HRESULT),
    #[fail(display = "Null ptr found: {}", _0)]
    NullPtr(NullPtrContext),
    #[fail(display = "Failed to convert GUID to string")]
    GuidToString,
    #[fail(display = "Can not convert from `{}`", _0)]
    TryFromError(u32),
    #[fail(display = "The DPFP runtime is not available on this platform")]
    Unsupported,
}

#[derive(Debug, Fail, PartialEq)]
pub enum NullPtrContext {
    #[fail(display = "on enumerating devices")]
    Enumerating,
}
