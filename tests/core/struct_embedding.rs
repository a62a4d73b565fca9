//! Nullable timestamps as fields of serde structs.

use crate::fixtures::*;
use nullscalar::{TimestampNano, TimestampSec};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Event {
    name: String,
    created_at: TimestampNano,
    deleted_at: TimestampNano,
}

#[test]
fn struct_serializes_null_and_integer() {
    let event = Event {
        name: "deploy".into(),
        created_at: TimestampNano::new_or_panic(new_year_2021()),
        deleted_at: TimestampNano::null(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(
        json,
        r#"{"name":"deploy","created_at":1609459200000000000,"deleted_at":null}"#
    );
}

#[test]
fn struct_round_trips() {
    let event = Event {
        name: "deploy".into(),
        created_at: TimestampNano::new_or_panic(with_nanos()),
        deleted_at: TimestampNano::null(),
    };
    let json = serde_json::to_vec(&event).unwrap();
    let back: Event = serde_json::from_slice(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn struct_accepts_rfc3339_fields() {
    let json = r#"{"name":"x","created_at":"2021-01-01T00:00:00Z","deleted_at":null}"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.created_at.instant(), Some(new_year_2021()));
    assert!(!event.deleted_at.is_valid());
}

#[test]
fn struct_rejects_boolean_field() {
    let json = r#"{"name":"x","created_at":true,"deleted_at":null}"#;
    assert!(serde_json::from_str::<Event>(json).is_err());
}

#[test]
fn struct_missing_field_is_absent() {
    let event: Event = serde_json::from_str(r#"{"name":"x","created_at":1}"#).unwrap();
    assert_eq!(event.created_at.as_i64(), 1);
    assert!(!event.deleted_at.is_valid());
    assert_eq!(event.deleted_at.as_i64(), 0);
}

#[test]
fn optional_field_wrapper() {
    #[derive(Deserialize)]
    struct Row {
        seen: Option<TimestampSec>,
    }

    let row: Row = serde_json::from_str(r#"{"seen":1609459200}"#).unwrap();
    assert_eq!(row.seen.unwrap().instant(), Some(new_year_2021()));
}
