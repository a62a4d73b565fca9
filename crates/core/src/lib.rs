//! Core types and traits for nullable scalars
//!
//! This crate defines optional scalar values that carry an explicit presence
//! flag and share one coercion and serialization contract:
//! - Value: closed set of input/driver kinds
//! - ValidFlag: presence marker
//! - NullableTimestamp: optional instant, with Sec/Milli/Micro/Nano aliases
//! - NullableScalar: trait shared by every nullable scalar
//! - Error: invalid-value rejection and serialization failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod traits;
pub mod value;

// Re-export commonly used types and traits
pub use contract::{
    Micros, Millis, Nanos, NullableTimestamp, Precision, Seconds, TimestampMicro, TimestampMilli,
    TimestampNano, TimestampSec, ValidFlag,
};
pub use error::{must, Error, InvalidValueError, Result};
pub use traits::NullableScalar;
pub use value::Value;
