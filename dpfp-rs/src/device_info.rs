use std::convert::TryFrom;
use std::fmt;

/// A `major.minor.build` revision triple.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, build: u32) -> Self {
        Version {
            major,
            minor,
            build,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

impl From<dpfp_sys::DP_DEVICE_VERSION> for Version {
    fn from(version: dpfp_sys::DP_DEVICE_VERSION) -> Self {
        Version::new(version.uMajor, version.uMinor, version.uBuild)
    }
}

/// Whether the identifier survives unplugging the reader.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UidType {
    Unknown,
    Persistent,
    Volatile,
}

impl fmt::Display for UidType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let string = match self {
            UidType::Unknown => "Unknown",
            UidType::Persistent => "Persistent",
            UidType::Volatile => "Volatile",
        };

        write!(f, "{}", string)
    }
}

impl TryFrom<u32> for UidType {
    type Error = crate::DpfpError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            dpfp_sys::DP_PERSISTENT_DEVICE_UID => Ok(UidType::Persistent),
            dpfp_sys::DP_VOLATILE_DEVICE_UID => Ok(UidType::Volatile),
            n => Err(crate::DpfpError::TryFromError(n)),
        }
    }
}

/// How the finger is presented to the sensor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Modality {
    Unknown,
    /// the finger is swiped over a narrow sensor
    Swipe,
    /// the finger is placed on a sensor covering the whole fingertip
    Area,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let string = match self {
            Modality::Unknown => "Unknown",
            Modality::Swipe => "Swipe",
            Modality::Area => "Area",
        };

        write!(f, "{}", string)
    }
}

impl TryFrom<u32> for Modality {
    type Error = crate::DpfpError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            dpfp_sys::DP_UNKNOWN_DEVICE_MODALITY => Ok(Modality::Unknown),
            dpfp_sys::DP_SWIPE_DEVICE => Ok(Modality::Swipe),
            dpfp_sys::DP_AREA_SENSOR_DEVICE => Ok(Modality::Area),
            n => Err(crate::DpfpError::TryFromError(n)),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Technology {
    Unknown,
    Optical,
    Capacitive,
    Thermal,
    Pressure,
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let string = match self {
            Technology::Unknown => "Unknown",
            Technology::Optical => "Optical",
            Technology::Capacitive => "Capacitive",
            Technology::Thermal => "Thermal",
            Technology::Pressure => "Pressure",
        };

        write!(f, "{}", string)
    }
}

impl TryFrom<u32> for Technology {
    type Error = crate::DpfpError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            dpfp_sys::DP_UNKNOWN_DEVICE_TECHNOLOGY => Ok(Technology::Unknown),
            dpfp_sys::DP_OPTICAL_DEVICE_TECHNOLOGY => Ok(Technology::Optical),
            dpfp_sys::DP_CAPACITIVE_DEVICE_TECHNOLOGY => Ok(Technology::Capacitive),
            dpfp_sys::DP_THERMAL_DEVICE_TECHNOLOGY => Ok(Technology::Thermal),
            dpfp_sys::DP_PRESSURE_DEVICE_TECHNOLOGY => Ok(Technology::Pressure),
            n => Err(crate::DpfpError::TryFromError(n)),
        }
    }
}

/// Snapshot of the descriptive data the runtime keeps for one reader.
///
/// Every query produces a fresh record, nothing is cached between calls.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeviceInfo {
    serial_number: String,
    product: String,
    vendor: String,
    language_id: u32,
    firmware: Version,
    hardware: Version,
    uid_type: UidType,
    modality: Modality,
    technology: Technology,
}

impl DeviceInfo {
    pub fn new(serial_number: &str, product: &str, vendor: &str) -> Self {
        DeviceInfo {
            serial_number: serial_number.to_owned(),
            product: product.to_owned(),
            vendor: vendor.to_owned(),
            language_id: 0,
            firmware: Version::default(),
            hardware: Version::default(),
            uid_type: UidType::Persistent,
            modality: Modality::Unknown,
            technology: Technology::Unknown,
        }
    }

    pub fn with_language_id(mut self, language_id: u32) -> Self {
        self.language_id = language_id;
        self
    }

    pub fn with_firmware(mut self, firmware: Version) -> Self {
        self.firmware = firmware;
        self
    }

    pub fn with_hardware(mut self, hardware: Version) -> Self {
        self.hardware = hardware;
        self
    }

    pub fn with_uid_type(mut self, uid_type: UidType) -> Self {
        self.uid_type = uid_type;
        self
    }

    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    pub fn with_technology(mut self, technology: Technology) -> Self {
        self.technology = technology;
        self
    }

    /// Serial number string descriptor of the reader.
    pub fn get_serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn get_product(&self) -> &str {
        &self.product
    }

    pub fn get_vendor(&self) -> &str {
        &self.vendor
    }

    /// USB language id the strings were read with, e.g. `0x0409` for US English.
    pub fn get_language_id(&self) -> u32 {
        self.language_id
    }

    pub fn get_firmware_version(&self) -> Version {
        self.firmware
    }

    pub fn get_hardware_version(&self) -> Version {
        self.hardware
    }

    pub fn get_uid_type(&self) -> UidType {
        self.uid_type
    }

    pub fn get_modality(&self) -> Modality {
        self.modality
    }

    pub fn get_technology(&self) -> Technology {
        self.technology
    }
}

/// Descriptor values newer than this crate read as `Unknown`, the rest of the
/// record is kept.
impl From<&dpfp_sys::DP_DEVICE_INFO> for DeviceInfo {
    fn from(info: &dpfp_sys::DP_DEVICE_INFO) -> Self {
        let hw = &info.HwInfo;

        DeviceInfo {
            serial_number: from_wide(&hw.szSerialNb),
            product: from_wide(&hw.szProduct),
            vendor: from_wide(&hw.szVendor),
            language_id: hw.uLanguageId,
            firmware: hw.FirmwareRevision.into(),
            hardware: hw.HardwareRevision.into(),
            uid_type: UidType::try_from(info.eUidType).unwrap_or(UidType::Unknown),
            modality: Modality::try_from(info.eDeviceModality).unwrap_or(Modality::Unknown),
            technology: Technology::try_from(info.eDeviceTech).unwrap_or(Technology::Unknown),
        }
    }
}

/// Decodes a NUL-terminated UTF-16 buffer. A buffer without terminator is taken whole.
pub(crate) fn from_wide(buffer: &[u16]) -> String {
    let end = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());

    String::from_utf16_lossy(&buffer[..end])
}
