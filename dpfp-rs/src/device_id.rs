use dpfp_sys::GUID;
use std::fmt;

/// Length of the canonical text form, braces included.
pub const DEVICE_ID_TEXT_LEN: usize = 38;

/// Identifier the runtime assigns to every attached reader.
///
/// The value is opaque: it is only meant to be compared, printed, and handed back
/// to the runtime. It stays valid for the lifetime of the `Session` that reported it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(GUID);

impl DeviceId {
    pub fn from_raw(guid: GUID) -> Self {
        DeviceId(guid)
    }

    /// Builds an identifier from its 128-bit big-endian value, i.e. the digits of
    /// the canonical text form read left to right.
    pub fn from_u128(value: u128) -> Self {
        DeviceId(GUID {
            Data1: (value >> 96) as u32,
            Data2: (value >> 80) as u16,
            Data3: (value >> 64) as u16,
            Data4: (value as u64).to_be_bytes(),
        })
    }

    #[cfg_attr(not(windows), allow(dead_code))]
    pub(crate) fn as_raw(&self) -> &GUID {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let guid = &self.0;
        let d = &guid.Data4;

        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            guid.Data1,
            guid.Data2,
            guid.Data3,
            d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

/// Copies the `count` identifiers the runtime reported at `uids`.
///
/// A null array is only accepted when `count` is zero.
///
/// # Safety
///
/// When non-null, `uids` must point to at least `count` initialised `GUID`s.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) unsafe fn device_ids_from_raw(
    uids: *const GUID,
    count: usize,
) -> crate::Result<Vec<DeviceId>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    if uids.is_null() {
        return Err(crate::DpfpError::NullPtr(crate::NullPtrContext::Enumerating));
    }

    Ok(std::slice::from_raw_parts(uids, count)
        .iter()
        .copied()
        .map(DeviceId::from_raw)
        .collect())
}
