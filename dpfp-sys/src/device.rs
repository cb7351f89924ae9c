use crate::{GUID, ULONG, WCHAR};

pub const MAX_USB_STRING_SIZE: usize = 127;

pub type DP_DEVICE_UID_TYPE = u32;
pub const DP_PERSISTENT_DEVICE_UID: DP_DEVICE_UID_TYPE = 0;
pub const DP_VOLATILE_DEVICE_UID: DP_DEVICE_UID_TYPE = 1;

pub type DP_DEVICE_MODALITY = u32;
pub const DP_UNKNOWN_DEVICE_MODALITY: DP_DEVICE_MODALITY = 0;
pub const DP_SWIPE_DEVICE: DP_DEVICE_MODALITY = 1;
pub const DP_AREA_SENSOR_DEVICE: DP_DEVICE_MODALITY = 2;
pub const DP_DEVICE_MODALITY_NUMBER: DP_DEVICE_MODALITY = 3;

pub type DP_DEVICE_TECHNOLOGY = u32;
pub const DP_UNKNOWN_DEVICE_TECHNOLOGY: DP_DEVICE_TECHNOLOGY = 0;
pub const DP_OPTICAL_DEVICE_TECHNOLOGY: DP_DEVICE_TECHNOLOGY = 1;
pub const DP_CAPACITIVE_DEVICE_TECHNOLOGY: DP_DEVICE_TECHNOLOGY = 2;
pub const DP_THERMAL_DEVICE_TECHNOLOGY: DP_DEVICE_TECHNOLOGY = 3;
pub const DP_PRESSURE_DEVICE_TECHNOLOGY: DP_DEVICE_TECHNOLOGY = 4;
pub const DP_DEVICE_TECHNOLOGY_NUMBER: DP_DEVICE_TECHNOLOGY = 5;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DP_DEVICE_VERSION {
    pub uMajor: ULONG,
    pub uMinor: ULONG,
    pub uBuild: ULONG,
}

/// Strings are NUL-terminated UTF-16 as reported by the USB string descriptors.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct DP_HW_INFO {
    pub uLanguageId: ULONG,
    pub szVendor: [WCHAR; MAX_USB_STRING_SIZE],
    pub szProduct: [WCHAR; MAX_USB_STRING_SIZE],
    pub szSerialNb: [WCHAR; MAX_USB_STRING_SIZE],
    pub HardwareRevision: DP_DEVICE_VERSION,
    pub FirmwareRevision: DP_DEVICE_VERSION,
}

impl Default for DP_HW_INFO {
    fn default() -> Self {
        DP_HW_INFO {
            uLanguageId: 0,
            szVendor: [0; MAX_USB_STRING_SIZE],
            szProduct: [0; MAX_USB_STRING_SIZE],
            szSerialNb: [0; MAX_USB_STRING_SIZE],
            HardwareRevision: DP_DEVICE_VERSION::default(),
            FirmwareRevision: DP_DEVICE_VERSION::default(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Default)]
pub struct DP_DEVICE_INFO {
    pub DeviceUid: GUID,
    pub eUidType: DP_DEVICE_UID_TYPE,
    pub eDeviceModality: DP_DEVICE_MODALITY,
    pub eDeviceTech: DP_DEVICE_TECHNOLOGY,
    pub HwInfo: DP_HW_INFO,
}
