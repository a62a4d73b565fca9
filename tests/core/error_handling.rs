//! Error family shape and the fatal boundary.

use nullscalar::{must, Error, InvalidValueError, TimestampNano, Value};

#[test]
fn invalid_value_message_for_nil() {
    let err = InvalidValueError::new(Value::Null);
    assert_eq!(err.to_string(), "invalid value: (nil)");
}

#[test]
fn invalid_value_message_for_string() {
    let err = InvalidValueError::new("aaaaaaa");
    assert_eq!(err.to_string(), "invalid value: (string)");
}

#[test]
fn invalid_value_keeps_rejected_input() {
    let mut ts = TimestampNano::default();
    match ts.set("1467059792").unwrap_err() {
        Error::InvalidValue(e) => assert_eq!(e.value, Value::from("1467059792")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_failures_are_serialization_errors() {
    let mut ts = TimestampNano::default();
    let err = ts.from_json(b"{}").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    assert!(!err.is_invalid_value());
}

#[test]
fn must_passes_through_success() {
    let ts = must(TimestampNano::try_new(chrono::Utc::now()));
    assert!(ts.is_valid());
}

#[test]
fn try_new_is_recoverable() {
    let result = std::panic::catch_unwind(|| TimestampNano::try_new("x").is_err());
    assert!(matches!(result, Ok(true)));
}

#[test]
fn new_or_panic_is_fatal() {
    let result = std::panic::catch_unwind(|| TimestampNano::new_or_panic("x"));
    assert!(result.is_err());
}
