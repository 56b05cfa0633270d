//! The SDK seam.
//!
//! [`PropertyApi`] is the narrow interface the setter needs from the DCAM-API. The real
//! library is reached through [`NativeApi`] (feature `native`); tests substitute their own
//! implementation.

use std::sync::Arc;

use crate::common::{ErrorCode, PropertyId};
use crate::device::DeviceHandle;

/// Name of the SDK entry point, as reported in diagnostics.
pub const SET_VALUE_FUNCTION: &str = "dcamprop_setvalue";

/// The SDK's "set property value" entry point.
pub trait PropertyApi {
    /// Issue exactly one set call and return the SDK's result code untouched.
    fn set_value(&self, handle: DeviceHandle, property: PropertyId, value: f64) -> ErrorCode;
}

impl<T: PropertyApi + ?Sized> PropertyApi for &T {
    fn set_value(&self, handle: DeviceHandle, property: PropertyId, value: f64) -> ErrorCode {
        (**self).set_value(handle, property, value)
    }
}

impl<T: PropertyApi + ?Sized> PropertyApi for Arc<T> {
    fn set_value(&self, handle: DeviceHandle, property: PropertyId, value: f64) -> ErrorCode {
        (**self).set_value(handle, property, value)
    }
}

/// Forwards to `dcamprop_setvalue` in the linked `dcamapi` library.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeApi;

#[cfg(feature = "native")]
impl PropertyApi for NativeApi {
    fn set_value(&self, handle: DeviceHandle, property: PropertyId, value: f64) -> ErrorCode {
        // The SDK documents its own thread-safety; no locking is added here.
        let err = unsafe { dcam_sys::dcamprop_setvalue(handle.as_hdcam(), property.raw(), value) };
        ErrorCode::from_raw(err)
    }
}
