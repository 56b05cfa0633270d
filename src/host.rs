//! Host-call adapter.
//!
//! A numerical host hands its arguments over as typed n-dimensional arrays. [`HostArray`]
//! models those arguments with `ndarray`, and [`set_property_from_host`] unpacks the
//! `(handle, propertyID, value)` triple the way the host's scalar accessors do before
//! calling the setter.

use ndarray::{ArrayD, IxDyn};

use crate::common::PropertyId;
use crate::device::DeviceHandle;
use crate::diagnostics::DiagnosticSink;
use crate::error::{DcamError, DcamResult};
use crate::sdk::PropertyApi;
use crate::setter::PropertySetter;

/// A numeric array argument received from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostArray {
    Double(ArrayD<f64>),
    Single(ArrayD<f32>),
    Int8(ArrayD<i8>),
    Int16(ArrayD<i16>),
    Int32(ArrayD<i32>),
    Int64(ArrayD<i64>),
    Uint8(ArrayD<u8>),
    Uint16(ArrayD<u16>),
    Uint32(ArrayD<u32>),
    Uint64(ArrayD<u64>),
    Logical(ArrayD<bool>),
}

impl HostArray {
    /// 1x1 `double` array.
    pub fn double(value: f64) -> Self {
        HostArray::Double(scalar_array(value))
    }

    /// 1x1 `uint64` array.
    pub fn uint64(value: u64) -> Self {
        HostArray::Uint64(scalar_array(value))
    }

    /// 1x1 `int32` array.
    pub fn int32(value: i32) -> Self {
        HostArray::Int32(scalar_array(value))
    }

    /// Host class name of the array, e.g. `"uint64"`.
    pub fn class_name(&self) -> &'static str {
        match self {
            HostArray::Double(_) => "double",
            HostArray::Single(_) => "single",
            HostArray::Int8(_) => "int8",
            HostArray::Int16(_) => "int16",
            HostArray::Int32(_) => "int32",
            HostArray::Int64(_) => "int64",
            HostArray::Uint8(_) => "uint8",
            HostArray::Uint16(_) => "uint16",
            HostArray::Uint32(_) => "uint32",
            HostArray::Uint64(_) => "uint64",
            HostArray::Logical(_) => "logical",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            HostArray::Double(a) => a.len(),
            HostArray::Single(a) => a.len(),
            HostArray::Int8(a) => a.len(),
            HostArray::Int16(a) => a.len(),
            HostArray::Int32(a) => a.len(),
            HostArray::Int64(a) => a.len(),
            HostArray::Uint8(a) => a.len(),
            HostArray::Uint16(a) => a.len(),
            HostArray::Uint32(a) => a.len(),
            HostArray::Uint64(a) => a.len(),
            HostArray::Logical(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First element converted to `f64`, or `None` for an empty array.
    ///
    /// 64-bit integers beyond 2^53 lose precision, as with the host's own scalar accessor.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            HostArray::Double(a) => a.iter().next().copied(),
            HostArray::Single(a) => a.iter().next().map(|v| f64::from(*v)),
            HostArray::Int8(a) => a.iter().next().map(|v| f64::from(*v)),
            HostArray::Int16(a) => a.iter().next().map(|v| f64::from(*v)),
            HostArray::Int32(a) => a.iter().next().map(|v| f64::from(*v)),
            HostArray::Int64(a) => a.iter().next().map(|v| *v as f64),
            HostArray::Uint8(a) => a.iter().next().map(|v| f64::from(*v)),
            HostArray::Uint16(a) => a.iter().next().map(|v| f64::from(*v)),
            HostArray::Uint32(a) => a.iter().next().map(|v| f64::from(*v)),
            HostArray::Uint64(a) => a.iter().next().map(|v| *v as f64),
            HostArray::Logical(a) => a.iter().next().map(|v| if *v { 1.0 } else { 0.0 }),
        }
    }

    /// The `uint64` payload, or `None` if the array holds another class.
    pub fn as_uint64(&self) -> Option<&ArrayD<u64>> {
        match self {
            HostArray::Uint64(a) => Some(a),
            _ => None,
        }
    }
}

fn scalar_array<T: Clone>(value: T) -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(&[1, 1]), value)
}

/// Read the session handle from the first element of a `uint64` array.
pub fn handle_from_host(arg: &HostArray, position: usize) -> DcamResult<DeviceHandle> {
    let data = arg.as_uint64().ok_or_else(|| {
        DcamError::invalid_argument(
            position,
            format!("camera handle must be uint64, got {}", arg.class_name()),
        )
    })?;
    data.iter()
        .next()
        .copied()
        .map(DeviceHandle::new)
        .ok_or_else(|| DcamError::invalid_argument(position, "camera handle array is empty"))
}

/// Read a scalar from the first element of any numeric array.
pub fn scalar_from_host(arg: &HostArray, position: usize) -> DcamResult<f64> {
    arg.scalar().ok_or_else(|| {
        DcamError::invalid_argument(position, format!("empty {} array", arg.class_name()))
    })
}

/// Host entry point: `[] = DCAM4SetProperty(cameraHandle, propertyID, value)`.
///
/// `args[0]` is a `uint64` handle array, `args[1]` the decimal property identifier and
/// `args[2]` the value; arguments beyond the third are ignored. The identifier is read as a
/// scalar and truncated toward zero (see [`PropertyId::from_f64`]).
///
/// Only marshalling problems are returned as errors, before any SDK call is made. An SDK
/// failure is reported through the setter's sink and the call still returns `Ok(())`.
pub fn set_property_from_host<A, S>(
    setter: &PropertySetter<A, S>,
    args: &[HostArray],
) -> DcamResult<()>
where
    A: PropertyApi,
    S: DiagnosticSink,
{
    let [handle_arg, property_arg, value_arg, ..] = args else {
        return Err(DcamError::invalid_argument(
            args.len(),
            format!(
                "expected 3 arguments (cameraHandle, propertyID, value), got {}",
                args.len()
            ),
        ));
    };

    let handle = handle_from_host(handle_arg, 0)?;
    let property = PropertyId::from_f64(scalar_from_host(property_arg, 1)?);
    let value = scalar_from_host(value_arg, 2)?;

    setter.set_property(handle, property, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_scalar_reads_first_element() {
        let arr = HostArray::Double(array![[3.5, 1.0], [2.0, 4.0]].into_dyn());
        assert_eq!(arr.scalar(), Some(3.5));
        assert_eq!(arr.len(), 4);

        let logical = HostArray::Logical(array![true, false].into_dyn());
        assert_eq!(logical.scalar(), Some(1.0));

        let empty = HostArray::Int32(ArrayD::from_shape_vec(IxDyn(&[0, 0]), vec![]).unwrap());
        assert!(empty.is_empty());
        assert_eq!(empty.scalar(), None);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(HostArray::uint64(1).class_name(), "uint64");
        assert_eq!(HostArray::double(1.0).class_name(), "double");
        assert_eq!(HostArray::int32(1).class_name(), "int32");
    }

    #[test]
    fn test_handle_requires_uint64() {
        let err = handle_from_host(&HostArray::double(5.0), 0).unwrap_err();
        assert!(matches!(err, DcamError::InvalidArgument { position: 0, .. }));
        assert!(err.to_string().contains("uint64"));

        let handle = handle_from_host(&HostArray::uint64(u64::MAX), 0).unwrap();
        assert_eq!(handle.raw(), u64::MAX);
    }
}
