//! Raw C bindings for the DCAM-API property interface.
//!
//! Only the declarations needed to write a property value are exposed here. The safe wrapper
//! lives in the `dcam4` crate.

#![allow(non_camel_case_types, non_snake_case)]

use std::ffi::c_void;

/// Opaque handle to an open DCAM device session (`HDCAM`).
pub type HDCAM = *mut c_void;

/// Result code returned by every DCAM-API call (`DCAMERR`).
pub type DCAMERR = i32;

/// DCAM-API signed 32-bit integer (`int32`).
pub type int32 = i32;

/// Property identifier (`DCAMIDPROP`).
pub type DCAMIDPROP = int32;

/// `failed()` from `dcamapi4.h`: error codes carry the high bit.
#[inline]
pub const fn failed(err: DCAMERR) -> bool {
    err < 0
}

// Status codes from dcamapi4.h. Written as u32 bit patterns and reinterpreted.
pub const DCAMERR_NONE: DCAMERR = 0;
pub const DCAMERR_SUCCESS: DCAMERR = 1;

pub const DCAMERR_BUSY: DCAMERR = 0x8000_0101_u32 as i32;
pub const DCAMERR_ABORT: DCAMERR = 0x8000_0102_u32 as i32;
pub const DCAMERR_NOTREADY: DCAMERR = 0x8000_0103_u32 as i32;
pub const DCAMERR_NOTSTABLE: DCAMERR = 0x8000_0104_u32 as i32;
pub const DCAMERR_UNSTABLE: DCAMERR = 0x8000_0105_u32 as i32;
pub const DCAMERR_TIMEOUT: DCAMERR = 0x8000_0106_u32 as i32;
pub const DCAMERR_NOTBUSY: DCAMERR = 0x8000_0107_u32 as i32;
pub const DCAMERR_NORESOURCE: DCAMERR = 0x8000_0201_u32 as i32;
pub const DCAMERR_NOMEMORY: DCAMERR = 0x8000_0203_u32 as i32;
pub const DCAMERR_NOMODULE: DCAMERR = 0x8000_0204_u32 as i32;
pub const DCAMERR_NODRIVER: DCAMERR = 0x8000_0205_u32 as i32;
pub const DCAMERR_NOCAMERA: DCAMERR = 0x8000_0206_u32 as i32;
pub const DCAMERR_INVALIDCAMERA: DCAMERR = 0x8000_0806_u32 as i32;
pub const DCAMERR_INVALIDHANDLE: DCAMERR = 0x8000_0807_u32 as i32;
pub const DCAMERR_INVALIDPARAM: DCAMERR = 0x8000_0808_u32 as i32;
pub const DCAMERR_INVALIDVALUE: DCAMERR = 0x8000_0821_u32 as i32;
pub const DCAMERR_OUTOFRANGE: DCAMERR = 0x8000_0822_u32 as i32;
pub const DCAMERR_NOTWRITABLE: DCAMERR = 0x8000_0823_u32 as i32;
pub const DCAMERR_NOTREADABLE: DCAMERR = 0x8000_0824_u32 as i32;
pub const DCAMERR_INVALIDPROPERTYID: DCAMERR = 0x8000_0825_u32 as i32;
pub const DCAMERR_NEWAPIREQUIRED: DCAMERR = 0x8000_0826_u32 as i32;
pub const DCAMERR_WRONGHANDSHAKE: DCAMERR = 0x8000_0827_u32 as i32;
pub const DCAMERR_NOPROPERTY: DCAMERR = 0x8000_0828_u32 as i32;
pub const DCAMERR_ACCESSDENY: DCAMERR = 0x8000_082C_u32 as i32;
pub const DCAMERR_WRONGPROPERTYVALUE: DCAMERR = 0x8000_082E_u32 as i32;
pub const DCAMERR_UNREACH: DCAMERR = 0x8000_0F01_u32 as i32;
pub const DCAMERR_NOTSUPPORT: DCAMERR = 0x8000_0F03_u32 as i32;
pub const DCAMERR_FAILOPEN: DCAMERR = 0x8000_1001_u32 as i32;

// Property identifiers from dcamprop.h.
pub const DCAM_IDPROP_TRIGGERSOURCE: DCAMIDPROP = 0x0010_0110;
pub const DCAM_IDPROP_TRIGGERACTIVE: DCAMIDPROP = 0x0010_0120;
pub const DCAM_IDPROP_TRIGGER_MODE: DCAMIDPROP = 0x0010_0210;
pub const DCAM_IDPROP_TRIGGERPOLARITY: DCAMIDPROP = 0x0010_0220;
pub const DCAM_IDPROP_TRIGGERDELAY: DCAMIDPROP = 0x0010_0260;
pub const DCAM_IDPROP_TRIGGERTIMES: DCAMIDPROP = 0x0010_0810;
pub const DCAM_IDPROP_EXPOSURETIME: DCAMIDPROP = 0x001F_0110;
pub const DCAM_IDPROP_SENSORTEMPERATURE: DCAMIDPROP = 0x0020_0310;
pub const DCAM_IDPROP_READOUTSPEED: DCAMIDPROP = 0x0040_0110;
pub const DCAM_IDPROP_SENSORMODE: DCAMIDPROP = 0x0040_0210;
pub const DCAM_IDPROP_BINNING: DCAMIDPROP = 0x0040_1110;
pub const DCAM_IDPROP_SUBARRAYHPOS: DCAMIDPROP = 0x0040_2110;
pub const DCAM_IDPROP_SUBARRAYHSIZE: DCAMIDPROP = 0x0040_2120;
pub const DCAM_IDPROP_SUBARRAYVPOS: DCAMIDPROP = 0x0040_2130;
pub const DCAM_IDPROP_SUBARRAYVSIZE: DCAMIDPROP = 0x0040_2140;
pub const DCAM_IDPROP_SUBARRAYMODE: DCAMIDPROP = 0x0040_2150;
pub const DCAM_IDPROP_INTERNALFRAMERATE: DCAMIDPROP = 0x0040_3810;
pub const DCAM_IDPROP_IMAGE_PIXELTYPE: DCAMIDPROP = 0x0042_0270;
pub const DCAM_IDPROP_DEFECTCORRECT_MODE: DCAMIDPROP = 0x0047_0010;

#[cfg_attr(feature = "native", link(name = "dcamapi"))]
unsafe extern "system" {
    /// Set the value of property `iProp` on the session `h`.
    ///
    /// The SDK rounds or rejects `fValue` according to the property's attributes and
    /// reports the outcome through the returned code.
    pub fn dcamprop_setvalue(h: HDCAM, iProp: int32, fValue: f64) -> DCAMERR;
}
