//! Epoch unit markers for nullable timestamps
//!
//! A [`NullableTimestamp`](super::NullableTimestamp) exposes its instant as a
//! signed 64-bit count of some unit since the Unix epoch. The marker type
//! picks the unit:
//!
//! | Marker | Unit | Representable range |
//! |--------|------|---------------------|
//! | [`Seconds`] | s | chrono's full range |
//! | [`Millis`] | ms | chrono's full range |
//! | [`Micros`] | µs | chrono's full range |
//! | [`Nanos`] | ns | 1677-09-21 ..= 2262-04-11 |
//!
//! Conversions in both directions are fallible: an instant whose unit count
//! overflows `i64`, or a count chrono cannot represent, yields `None`.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Debug;
use std::hash::Hash;

/// Unit of the integer surfaces of a nullable timestamp
pub trait Precision:
    Debug + Clone + Copy + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Short unit name, used in diagnostics
    const UNIT: &'static str;

    /// Count of units since the epoch, if it fits in `i64`
    fn to_units(instant: &DateTime<Utc>) -> Option<i64>;

    /// Instant at `units` since the epoch, if representable
    fn from_units(units: i64) -> Option<DateTime<Utc>>;
}

/// Whole seconds since the epoch (sub-second part truncated)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Seconds;

/// Milliseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Millis;

/// Microseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Micros;

/// Nanoseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nanos;

impl Precision for Seconds {
    const UNIT: &'static str = "s";

    fn to_units(instant: &DateTime<Utc>) -> Option<i64> {
        Some(instant.timestamp())
    }

    fn from_units(units: i64) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(units, 0).single()
    }
}

impl Precision for Millis {
    const UNIT: &'static str = "ms";

    fn to_units(instant: &DateTime<Utc>) -> Option<i64> {
        Some(instant.timestamp_millis())
    }

    fn from_units(units: i64) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(units).single()
    }
}

impl Precision for Micros {
    const UNIT: &'static str = "us";

    fn to_units(instant: &DateTime<Utc>) -> Option<i64> {
        Some(instant.timestamp_micros())
    }

    fn from_units(units: i64) -> Option<DateTime<Utc>> {
        Utc.timestamp_micros(units).single()
    }
}

impl Precision for Nanos {
    const UNIT: &'static str = "ns";

    fn to_units(instant: &DateTime<Utc>) -> Option<i64> {
        instant.timestamp_nanos_opt()
    }

    // Every i64 nanosecond count is a valid instant.
    fn from_units(units: i64) -> Option<DateTime<Utc>> {
        Some(Utc.timestamp_nanos(units))
    }
}
