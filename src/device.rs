//! Device session handles

use std::fmt;

use dcam_sys::HDCAM;

/// Handle of a DCAM device session opened elsewhere.
///
/// The session is owned by the SDK: this type never opens, closes or validates it. The
/// value is carried as the `u64` the caller supplied and only becomes an `HDCAM` at the FFI
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle(u64);

impl DeviceHandle {
    pub const fn new(raw: u64) -> Self {
        DeviceHandle(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Native handle value passed to the SDK.
    ///
    /// Numerically identical on 64-bit targets. On 32-bit targets the high half is
    /// discarded, matching a pointer-sized cast.
    pub fn as_hdcam(self) -> HDCAM {
        self.0 as usize as HDCAM
    }
}

impl From<u64> for DeviceHandle {
    fn from(raw: u64) -> Self {
        DeviceHandle(raw)
    }
}

impl From<DeviceHandle> for u64 {
    fn from(handle: DeviceHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}
