//! The property setter shim.
//!
//! One call in, one SDK call out. Failures are reported through a [`DiagnosticSink`] and
//! never escape [`PropertySetter::set_property`]; [`PropertySetter::set_property_checked`]
//! has the same side effects and also returns the outcome.

use crate::common::{ErrorCode, PropertyId};
use crate::device::DeviceHandle;
use crate::diagnostics::{DiagnosticSink, StdoutSink, failure_message};
use crate::error::{DcamError, DcamResult};
use crate::sdk::{PropertyApi, SET_VALUE_FUNCTION};

/// Sets camera properties through a [`PropertyApi`], reporting failures to a sink.
///
/// Holds no state between calls. Calling twice with the same arguments issues two SDK calls.
#[derive(Debug, Clone, Default)]
pub struct PropertySetter<A, S = StdoutSink> {
    api: A,
    sink: S,
}

impl<A: PropertyApi> PropertySetter<A, StdoutSink> {
    /// Setter that prints diagnostics to standard output.
    pub fn with_stdout(api: A) -> Self {
        Self::new(api, StdoutSink)
    }
}

impl<A: PropertyApi, S: DiagnosticSink> PropertySetter<A, S> {
    pub fn new(api: A, sink: S) -> Self {
        Self { api, sink }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (A, S) {
        (self.api, self.sink)
    }

    /// Set `property` to `value` on the session behind `handle`.
    ///
    /// On failure a diagnostic with the hexadecimal error code is written to the sink and
    /// the call returns normally.
    pub fn set_property(&self, handle: DeviceHandle, property: PropertyId, value: f64) {
        let _ = self.set_property_checked(handle, property, value);
    }

    /// Same as [`set_property`](Self::set_property), but also returns the outcome.
    pub fn set_property_checked(
        &self,
        handle: DeviceHandle,
        property: PropertyId,
        value: f64,
    ) -> DcamResult<()> {
        tracing::debug!(%handle, %property, value, "setting DCAM property");

        let code = self.api.set_value(handle, property, value);
        if code.is_success() {
            return Ok(());
        }

        self.report_failure(handle, property, code);
        Err(DcamError::Sdk {
            function: SET_VALUE_FUNCTION,
            code,
        })
    }

    fn report_failure(&self, handle: DeviceHandle, property: PropertyId, code: ErrorCode) {
        tracing::warn!(
            %handle,
            %property,
            %code,
            "{SET_VALUE_FUNCTION}() failed"
        );
        self.sink.emit(&failure_message(SET_VALUE_FUNCTION, code));
    }
}

/// Set a property on an open session through the linked DCAM-API.
///
/// `handle` is the session handle as an unsigned 64-bit value and `property_id` the decimal
/// form of the `DCAM_IDPROP_*` code. Nothing is returned; on failure
/// `Error = 0x........\ndcamprop_setvalue() failed.\n` is printed to standard output.
#[cfg(feature = "native")]
pub fn set_property(handle: u64, property_id: i32, value: f64) {
    PropertySetter::with_stdout(crate::sdk::NativeApi).set_property(
        DeviceHandle::new(handle),
        PropertyId::new(property_id),
        value,
    );
}
