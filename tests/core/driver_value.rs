//! Storage driver surface: `driver_value`, `scan`, `from_driver_value`.

use crate::fixtures::*;
use nullscalar::{NullableScalar, TimestampMicro, TimestampNano, Value};

#[test]
fn driver_value_of_absent_is_null() {
    let ts = TimestampNano::default();
    assert_eq!(ts.driver_value().unwrap(), Value::Null);
}

#[test]
fn driver_value_of_present_is_int() {
    let ts = TimestampNano::new_or_panic(new_year_2021());
    assert_eq!(ts.driver_value().unwrap(), Value::Int(NEW_YEAR_2021_NANOS));
}

#[test]
fn driver_value_round_trips_through_scan() {
    let ts = TimestampNano::new_or_panic(with_nanos());
    let stored = ts.driver_value().unwrap();

    let restored = TimestampNano::from_driver_value(stored).unwrap();
    assert_eq!(restored, ts);
}

#[test]
fn scan_accepts_nil_int_and_instant() {
    let mut ts = TimestampNano::default();

    ts.scan(Value::Instant(new_year_2021())).unwrap();
    assert_eq!(ts.as_i64(), NEW_YEAR_2021_NANOS);

    ts.scan(Value::Int(5)).unwrap();
    assert_eq!(ts.as_i64(), 5);

    ts.scan(Value::Null).unwrap();
    assert!(!ts.is_valid());
}

#[test]
fn scan_rejects_text_and_bytes() {
    let mut ts = TimestampNano::new_or_panic(new_year_2021());
    let err = ts.scan(Value::from("1609459200000000000")).unwrap_err();
    assert!(err.is_invalid_value());
    assert!(!ts.is_valid());

    let err = TimestampNano::from_driver_value(b"\x00\x01".to_vec()).unwrap_err();
    assert_eq!(err.to_string(), "invalid value: (bytes)");
}

#[test]
fn micros_driver_value_is_microseconds() {
    let ts = TimestampMicro::new_or_panic(new_year_2021());
    assert_eq!(ts.driver_value().unwrap(), Value::Int(1_609_459_200_000_000));
}

#[test]
fn storage_code_is_generic_over_scalars() {
    fn copy_through_storage(src: &dyn NullableScalar, dst: &mut dyn NullableScalar) {
        let stored = src.driver_value().unwrap();
        dst.scan(stored).unwrap();
    }

    let src = TimestampNano::new_or_panic(with_nanos());
    let mut dst = TimestampNano::default();
    copy_through_storage(&src, &mut dst);
    assert_eq!(dst, src);

    let mut cleared = TimestampNano::new_or_panic(with_nanos());
    copy_through_storage(&TimestampNano::null(), &mut cleared);
    assert!(!cleared.is_valid());
}
