//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use dcam4::{DeviceHandle, ErrorCode, PropertyApi, PropertyId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedCall {
    pub handle: DeviceHandle,
    pub property: PropertyId,
    pub value: f64,
}

/// Stand-in for the DCAM-API that records every call.
#[derive(Debug)]
pub struct MockApi {
    result: ErrorCode,
    overrides: HashMap<PropertyId, ErrorCode>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockApi {
    pub fn returning(result: ErrorCode) -> Self {
        Self {
            result,
            overrides: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::returning(ErrorCode::NONE)
    }

    /// Return `code` for `property` instead of the default result.
    pub fn with_failure(mut self, property: PropertyId, code: ErrorCode) -> Self {
        self.overrides.insert(property, code);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PropertyApi for MockApi {
    fn set_value(&self, handle: DeviceHandle, property: PropertyId, value: f64) -> ErrorCode {
        self.calls.lock().unwrap().push(RecordedCall {
            handle,
            property,
            value,
        });
        self.overrides.get(&property).copied().unwrap_or(self.result)
    }
}
