pub mod common;
pub mod device;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod preset;
pub mod sdk;
pub mod setter;

pub use dcam_sys as bindings;

// Re-export main types for convenience
pub use crate::common::{ErrorCode, PropertyId};
pub use crate::device::DeviceHandle;
pub use crate::diagnostics::{DiagnosticSink, MemorySink, StdoutSink, failure_message};
pub use crate::error::{DcamError, DcamResult};
pub use crate::host::{HostArray, set_property_from_host};
pub use crate::preset::{Preset, PresetReport, PropertySetting, apply_preset};
pub use crate::sdk::{PropertyApi, SET_VALUE_FUNCTION};
pub use crate::setter::PropertySetter;

#[cfg(feature = "native")]
pub use crate::sdk::NativeApi;
#[cfg(feature = "native")]
pub use crate::setter::set_property;
