mod support;

use dcam4::{
    DcamError, DeviceHandle, ErrorCode, HostArray, MemorySink, PropertyId, PropertySetter,
    set_property_from_host,
};
use ndarray::{ArrayD, IxDyn, array};
use support::{MockApi, RecordedCall};

fn setter(result: ErrorCode) -> PropertySetter<MockApi, MemorySink> {
    PropertySetter::new(MockApi::returning(result), MemorySink::new())
}

#[test]
fn host_triple_is_unpacked_and_forwarded() {
    let setter = setter(ErrorCode::NONE);
    let args = [
        HostArray::uint64(0x1A2B3C4D),
        HostArray::double(8.0),
        HostArray::double(1.0),
    ];

    set_property_from_host(&setter, &args).unwrap();

    assert_eq!(
        setter.api().calls(),
        vec![RecordedCall {
            handle: DeviceHandle::new(0x1A2B3C4D),
            property: PropertyId::new(8),
            value: 1.0,
        }]
    );
    assert!(setter.sink().is_empty());
}

#[test]
fn sdk_failure_is_swallowed_by_the_host_call() {
    let setter = setter(ErrorCode::from_bits(0x8000_0001));
    let args = [
        HostArray::uint64(0x1A2B3C4D),
        HostArray::double(8.0),
        HostArray::double(1.0),
    ];

    assert!(set_property_from_host(&setter, &args).is_ok());
    assert_eq!(
        setter.sink().contents(),
        "Error = 0x80000001\ndcamprop_setvalue() failed.\n"
    );
}

#[test]
fn property_id_is_truncated_from_any_numeric_class() {
    let setter = setter(ErrorCode::NONE);
    let handle = HostArray::uint64(1);
    let value = HostArray::double(0.5);

    for property in [
        HostArray::double(2031888.9),
        HostArray::Int64(array![2031888_i64].into_dyn()),
        HostArray::Uint32(array![2031888_u32].into_dyn()),
        HostArray::Single(array![16.0_f32].into_dyn()),
    ] {
        set_property_from_host(&setter, &[handle.clone(), property, value.clone()]).unwrap();
    }

    let ids: Vec<i32> = setter.api().calls().iter().map(|c| c.property.raw()).collect();
    assert_eq!(ids, vec![2031888, 2031888, 2031888, 16]);
}

#[test]
fn full_width_handle_survives_marshalling() {
    let setter = setter(ErrorCode::NONE);
    let args = [
        HostArray::uint64(0xFFFF_0000_1234_5678),
        HostArray::int32(8),
        HostArray::double(3.25),
    ];

    set_property_from_host(&setter, &args).unwrap();

    let call = setter.api().calls()[0];
    assert_eq!(call.handle.raw(), 0xFFFF_0000_1234_5678);
    assert_eq!(call.value, 3.25);
}

#[test]
fn only_the_first_element_of_each_array_is_used() {
    let setter = setter(ErrorCode::NONE);
    let args = [
        HostArray::Uint64(array![[11_u64, 12], [13, 14]].into_dyn()),
        HostArray::Double(array![8.0, 9.0, 10.0].into_dyn()),
        HostArray::Double(array![0.25, 0.5].into_dyn()),
    ];

    set_property_from_host(&setter, &args).unwrap();

    let call = setter.api().calls()[0];
    assert_eq!(call.handle.raw(), 11);
    assert_eq!(call.property.raw(), 8);
    assert_eq!(call.value, 0.25);
}

#[test]
fn extra_arguments_are_ignored() {
    let setter = setter(ErrorCode::NONE);
    let args = [
        HostArray::uint64(5),
        HostArray::double(8.0),
        HostArray::double(1.0),
        HostArray::double(99.0),
    ];

    set_property_from_host(&setter, &args).unwrap();
    assert_eq!(setter.api().calls().len(), 1);
}

#[test]
fn missing_arguments_fail_before_the_sdk_call() {
    let setter = setter(ErrorCode::NONE);
    let args = [HostArray::uint64(5), HostArray::double(8.0)];

    let err = set_property_from_host(&setter, &args).unwrap_err();

    assert!(matches!(err, DcamError::InvalidArgument { position: 2, .. }));
    assert!(setter.api().calls().is_empty());
    assert!(setter.sink().is_empty());
}

#[test]
fn handle_of_wrong_class_is_rejected() {
    let setter = setter(ErrorCode::NONE);
    let args = [
        HostArray::double(5.0),
        HostArray::double(8.0),
        HostArray::double(1.0),
    ];

    let err = set_property_from_host(&setter, &args).unwrap_err();

    assert!(matches!(err, DcamError::InvalidArgument { position: 0, .. }));
    assert!(setter.api().calls().is_empty());
}

#[test]
fn empty_value_array_is_rejected() {
    let setter = setter(ErrorCode::NONE);
    let empty = ArrayD::<f64>::from_shape_vec(IxDyn(&[0, 0]), vec![]).unwrap();
    let args = [
        HostArray::uint64(5),
        HostArray::double(8.0),
        HostArray::Double(empty),
    ];

    let err = set_property_from_host(&setter, &args).unwrap_err();

    assert!(matches!(err, DcamError::InvalidArgument { position: 2, .. }));
    assert!(setter.api().calls().is_empty());
}
