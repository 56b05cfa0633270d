//! Property presets.
//!
//! A preset is an ordered list of property settings stored as JSON:
//!
//! ```json
//! { "properties": [
//!     { "property": "EXPOSURETIME", "value": 0.01 },
//!     { "property": 1048848, "value": 2.0 },
//!     { "property": "0x00400210", "value": 1.0 }
//! ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{ErrorCode, PropertyId};
use crate::device::DeviceHandle;
use crate::diagnostics::DiagnosticSink;
use crate::error::DcamResult;
use crate::sdk::PropertyApi;
use crate::setter::PropertySetter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySetting {
    pub property: PropertyId,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub properties: Vec<PropertySetting>,
}

impl Preset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: PropertyId, value: f64) -> Self {
        self.properties.push(PropertySetting { property, value });
        self
    }

    pub fn from_json_str(json: &str) -> DcamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DcamResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> DcamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Outcome of [`apply_preset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetReport {
    pub attempted: usize,
    pub failures: Vec<(PropertyId, ErrorCode)>,
}

impl PresetReport {
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply every setting of `preset` to `handle`, in order.
///
/// Each entry is an independent setter call: a failing entry produces its diagnostic and
/// the remaining entries are still applied. Nothing is retried.
pub fn apply_preset<A, S>(
    setter: &PropertySetter<A, S>,
    handle: DeviceHandle,
    preset: &Preset,
) -> PresetReport
where
    A: PropertyApi,
    S: DiagnosticSink,
{
    let mut report = PresetReport::default();
    for setting in &preset.properties {
        report.attempted += 1;
        if let Err(err) = setter.set_property_checked(handle, setting.property, setting.value) {
            if let Some(code) = err.code() {
                report.failures.push((setting.property, code));
            }
        }
    }
    tracing::info!(
        %handle,
        attempted = report.attempted,
        failed = report.failures.len(),
        "applied DCAM property preset"
    );
    report
}
