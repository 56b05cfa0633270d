use std::fmt;
use std::str::FromStr;

use dcam_sys::{DCAMERR, DCAMIDPROP};
use serde::{Deserialize, Serialize};

use crate::error::DcamError;

/// Result code of a DCAM-API call, corresponding to `DCAMERR`.
///
/// Classification follows the SDK's `failed()` predicate: a code is a failure when it is
/// negative as a signed 32-bit integer. `NONE` (0) and `SUCCESS` (1) are both success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(DCAMERR);

impl ErrorCode {
    pub const NONE: ErrorCode = ErrorCode(dcam_sys::DCAMERR_NONE);
    pub const SUCCESS: ErrorCode = ErrorCode(dcam_sys::DCAMERR_SUCCESS);

    pub const fn from_raw(raw: DCAMERR) -> Self {
        ErrorCode(raw)
    }

    /// Build a code from its documented hexadecimal bit pattern, e.g. `0x80000807`.
    pub const fn from_bits(bits: u32) -> Self {
        ErrorCode(bits as i32)
    }

    pub const fn raw(self) -> DCAMERR {
        self.0
    }

    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    pub const fn is_failure(self) -> bool {
        dcam_sys::failed(self.0)
    }

    pub const fn is_success(self) -> bool {
        !self.is_failure()
    }

    /// Symbolic `DCAMERR_*` name, if the code is one of the well-known ones.
    pub fn name(self) -> Option<&'static str> {
        KNOWN_ERRORS
            .iter()
            .find(|(_, raw)| *raw == self.0)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.bits())?;
        if let Some(name) = self.name() {
            write!(f, " ({name})")?;
        }
        Ok(())
    }
}

impl From<DCAMERR> for ErrorCode {
    fn from(raw: DCAMERR) -> Self {
        ErrorCode(raw)
    }
}

const KNOWN_ERRORS: &[(&str, DCAMERR)] = &[
    ("DCAMERR_NONE", dcam_sys::DCAMERR_NONE),
    ("DCAMERR_SUCCESS", dcam_sys::DCAMERR_SUCCESS),
    ("DCAMERR_BUSY", dcam_sys::DCAMERR_BUSY),
    ("DCAMERR_ABORT", dcam_sys::DCAMERR_ABORT),
    ("DCAMERR_NOTREADY", dcam_sys::DCAMERR_NOTREADY),
    ("DCAMERR_NOTSTABLE", dcam_sys::DCAMERR_NOTSTABLE),
    ("DCAMERR_UNSTABLE", dcam_sys::DCAMERR_UNSTABLE),
    ("DCAMERR_TIMEOUT", dcam_sys::DCAMERR_TIMEOUT),
    ("DCAMERR_NOTBUSY", dcam_sys::DCAMERR_NOTBUSY),
    ("DCAMERR_NORESOURCE", dcam_sys::DCAMERR_NORESOURCE),
    ("DCAMERR_NOMEMORY", dcam_sys::DCAMERR_NOMEMORY),
    ("DCAMERR_NOMODULE", dcam_sys::DCAMERR_NOMODULE),
    ("DCAMERR_NODRIVER", dcam_sys::DCAMERR_NODRIVER),
    ("DCAMERR_NOCAMERA", dcam_sys::DCAMERR_NOCAMERA),
    ("DCAMERR_INVALIDCAMERA", dcam_sys::DCAMERR_INVALIDCAMERA),
    ("DCAMERR_INVALIDHANDLE", dcam_sys::DCAMERR_INVALIDHANDLE),
    ("DCAMERR_INVALIDPARAM", dcam_sys::DCAMERR_INVALIDPARAM),
    ("DCAMERR_INVALIDVALUE", dcam_sys::DCAMERR_INVALIDVALUE),
    ("DCAMERR_OUTOFRANGE", dcam_sys::DCAMERR_OUTOFRANGE),
    ("DCAMERR_NOTWRITABLE", dcam_sys::DCAMERR_NOTWRITABLE),
    ("DCAMERR_NOTREADABLE", dcam_sys::DCAMERR_NOTREADABLE),
    ("DCAMERR_INVALIDPROPERTYID", dcam_sys::DCAMERR_INVALIDPROPERTYID),
    ("DCAMERR_NEWAPIREQUIRED", dcam_sys::DCAMERR_NEWAPIREQUIRED),
    ("DCAMERR_WRONGHANDSHAKE", dcam_sys::DCAMERR_WRONGHANDSHAKE),
    ("DCAMERR_NOPROPERTY", dcam_sys::DCAMERR_NOPROPERTY),
    ("DCAMERR_ACCESSDENY", dcam_sys::DCAMERR_ACCESSDENY),
    ("DCAMERR_WRONGPROPERTYVALUE", dcam_sys::DCAMERR_WRONGPROPERTYVALUE),
    ("DCAMERR_UNREACH", dcam_sys::DCAMERR_UNREACH),
    ("DCAMERR_NOTSUPPORT", dcam_sys::DCAMERR_NOTSUPPORT),
    ("DCAMERR_FAILOPEN", dcam_sys::DCAMERR_FAILOPEN),
];

/// Camera property identifier, corresponding to `DCAMIDPROP`.
///
/// Any `i32` is accepted; the SDK rejects unknown identifiers itself. The associated
/// constants cover the commonly used entries of `dcamprop.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "PropertyRef", into = "i32")]
pub struct PropertyId(DCAMIDPROP);

impl PropertyId {
    pub const TRIGGER_SOURCE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_TRIGGERSOURCE);
    pub const TRIGGER_ACTIVE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_TRIGGERACTIVE);
    pub const TRIGGER_MODE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_TRIGGER_MODE);
    pub const TRIGGER_POLARITY: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_TRIGGERPOLARITY);
    pub const TRIGGER_DELAY: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_TRIGGERDELAY);
    pub const TRIGGER_TIMES: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_TRIGGERTIMES);
    pub const EXPOSURE_TIME: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_EXPOSURETIME);
    pub const SENSOR_TEMPERATURE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_SENSORTEMPERATURE);
    pub const READOUT_SPEED: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_READOUTSPEED);
    pub const SENSOR_MODE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_SENSORMODE);
    pub const BINNING: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_BINNING);
    pub const SUBARRAY_HPOS: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_SUBARRAYHPOS);
    pub const SUBARRAY_HSIZE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_SUBARRAYHSIZE);
    pub const SUBARRAY_VPOS: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_SUBARRAYVPOS);
    pub const SUBARRAY_VSIZE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_SUBARRAYVSIZE);
    pub const SUBARRAY_MODE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_SUBARRAYMODE);
    pub const INTERNAL_FRAME_RATE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_INTERNALFRAMERATE);
    pub const IMAGE_PIXEL_TYPE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_IMAGE_PIXELTYPE);
    pub const DEFECT_CORRECT_MODE: PropertyId = PropertyId(dcam_sys::DCAM_IDPROP_DEFECTCORRECT_MODE);

    pub const fn new(raw: DCAMIDPROP) -> Self {
        PropertyId(raw)
    }

    pub const fn raw(self) -> DCAMIDPROP {
        self.0
    }

    /// Convert a floating-point identifier as the host supplies it.
    ///
    /// Truncates toward zero. Values beyond the `i32` range saturate at `i32::MIN` /
    /// `i32::MAX` and NaN maps to 0.
    pub fn from_f64(value: f64) -> Self {
        PropertyId(value as i32)
    }

    /// Convert a wide signed integer by keeping its low 32 bits (two's complement).
    pub fn from_i64(value: i64) -> Self {
        PropertyId(value as i32)
    }

    /// Convert a wide unsigned integer by keeping its low 32 bits.
    pub fn from_u64(value: u64) -> Self {
        PropertyId(value as i32)
    }

    /// Symbolic name without the `DCAM_IDPROP_` prefix, e.g. `EXPOSURETIME`.
    pub fn name(self) -> Option<&'static str> {
        KNOWN_PROPERTIES
            .iter()
            .find(|(_, raw)| *raw == self.0)
            .map(|(name, _)| *name)
    }

    /// Look up a well-known property by name.
    ///
    /// Matching ignores case and an optional `DCAM_IDPROP_` prefix.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("DCAM_IDPROP_").unwrap_or(&upper);
        KNOWN_PROPERTIES
            .iter()
            .find(|(known, _)| *known == bare)
            .map(|(_, raw)| PropertyId(*raw))
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} (0x{:08X})", self.0 as u32),
            None => write!(f, "0x{:08X}", self.0 as u32),
        }
    }
}

impl From<i32> for PropertyId {
    fn from(raw: i32) -> Self {
        PropertyId(raw)
    }
}

impl From<PropertyId> for i32 {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

impl FromStr for PropertyId {
    type Err = DcamError;

    /// Accepts a decimal code, a `0x` prefixed hexadecimal code, or a known name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16)
                .map(|bits| PropertyId(bits as i32))
                .map_err(|_| DcamError::UnknownProperty(s.to_string()));
        }
        if let Ok(code) = s.parse::<i32>() {
            return Ok(PropertyId(code));
        }
        PropertyId::from_name(s).ok_or_else(|| DcamError::UnknownProperty(s.to_string()))
    }
}

/// Serialized form of a property reference in presets: a code or a name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum PropertyRef {
    Code(i32),
    Text(String),
}

impl TryFrom<PropertyRef> for PropertyId {
    type Error = DcamError;

    fn try_from(value: PropertyRef) -> Result<Self, Self::Error> {
        match value {
            PropertyRef::Code(code) => Ok(PropertyId(code)),
            PropertyRef::Text(text) => text.parse(),
        }
    }
}

const KNOWN_PROPERTIES: &[(&str, DCAMIDPROP)] = &[
    ("TRIGGERSOURCE", dcam_sys::DCAM_IDPROP_TRIGGERSOURCE),
    ("TRIGGERACTIVE", dcam_sys::DCAM_IDPROP_TRIGGERACTIVE),
    ("TRIGGER_MODE", dcam_sys::DCAM_IDPROP_TRIGGER_MODE),
    ("TRIGGERPOLARITY", dcam_sys::DCAM_IDPROP_TRIGGERPOLARITY),
    ("TRIGGERDELAY", dcam_sys::DCAM_IDPROP_TRIGGERDELAY),
    ("TRIGGERTIMES", dcam_sys::DCAM_IDPROP_TRIGGERTIMES),
    ("EXPOSURETIME", dcam_sys::DCAM_IDPROP_EXPOSURETIME),
    ("SENSORTEMPERATURE", dcam_sys::DCAM_IDPROP_SENSORTEMPERATURE),
    ("READOUTSPEED", dcam_sys::DCAM_IDPROP_READOUTSPEED),
    ("SENSORMODE", dcam_sys::DCAM_IDPROP_SENSORMODE),
    ("BINNING", dcam_sys::DCAM_IDPROP_BINNING),
    ("SUBARRAYHPOS", dcam_sys::DCAM_IDPROP_SUBARRAYHPOS),
    ("SUBARRAYHSIZE", dcam_sys::DCAM_IDPROP_SUBARRAYHSIZE),
    ("SUBARRAYVPOS", dcam_sys::DCAM_IDPROP_SUBARRAYVPOS),
    ("SUBARRAYVSIZE", dcam_sys::DCAM_IDPROP_SUBARRAYVSIZE),
    ("SUBARRAYMODE", dcam_sys::DCAM_IDPROP_SUBARRAYMODE),
    ("INTERNALFRAMERATE", dcam_sys::DCAM_IDPROP_INTERNALFRAMERATE),
    ("IMAGE_PIXELTYPE", dcam_sys::DCAM_IDPROP_IMAGE_PIXELTYPE),
    ("DEFECTCORRECT_MODE", dcam_sys::DCAM_IDPROP_DEFECTCORRECT_MODE),
];
