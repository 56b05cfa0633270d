#![cfg(feature = "hit")]

/// Hardware Integration Tests against the installed DCAM-API.
///
/// These tests link the real `dcamapi` library and are disabled by default.
#[cfg(test)]
mod hardware_integration_tests {
    use dcam4::{DcamError, DeviceHandle, MemorySink, NativeApi, PropertyId, PropertySetter};

    #[test]
    fn test_null_handle_is_rejected_by_the_sdk() {
        let setter = PropertySetter::new(NativeApi, MemorySink::new());

        let result =
            setter.set_property_checked(DeviceHandle::new(0), PropertyId::EXPOSURE_TIME, 0.01);

        match result {
            Err(DcamError::Sdk { code, .. }) => assert!(code.is_failure()),
            other => panic!("expected an SDK failure for a null handle, got {other:?}"),
        }
        assert!(setter.sink().contents().ends_with("dcamprop_setvalue() failed.\n"));
    }

    #[test]
    #[ignore] // Requires an open camera session handle in DCAM_TEST_HANDLE
    fn test_set_exposure_on_open_session() {
        let raw: u64 = std::env::var("DCAM_TEST_HANDLE")
            .expect("DCAM_TEST_HANDLE must hold an open session handle")
            .parse()
            .expect("DCAM_TEST_HANDLE must be a decimal u64");

        let setter = PropertySetter::new(NativeApi, MemorySink::new());
        setter
            .set_property_checked(DeviceHandle::new(raw), PropertyId::EXPOSURE_TIME, 0.01)
            .expect("setting the exposure time should succeed");
        assert!(setter.sink().is_empty());
    }
}
