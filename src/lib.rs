//! nullscalar - Nullable scalar values with explicit presence
//!
//! Optional scalars that distinguish "absent" from "zero", coerce loosely
//! typed input by kind, and convert to JSON and storage driver values.
//!
//! # Quick Start
//!
//! ```
//! use nullscalar::{TimestampNano, Value};
//!
//! let mut ts = TimestampNano::default();
//! assert_eq!(ts.to_json().unwrap(), b"null");
//!
//! ts.set(1_609_459_200_000_000_000i64).unwrap();
//! assert_eq!(ts.driver_value().unwrap(), Value::Int(1_609_459_200_000_000_000));
//!
//! // Text is never parsed, even when it looks numeric
//! assert!(ts.set("1609459200").is_err());
//! assert!(!ts.is_valid());
//! ```

// Re-export the public API from nullscalar-core
pub use nullscalar_core::*;
