//! Shared instants for the integration suites.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

/// 2021-01-01T00:00:00Z
pub fn new_year_2021() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
}

/// Nanoseconds of [`new_year_2021`]
pub const NEW_YEAR_2021_NANOS: i64 = 1_609_459_200_000_000_000;

/// An instant with a non-zero sub-second part
pub fn with_nanos() -> DateTime<Utc> {
    Utc.timestamp_nanos(1_700_000_000_123_456_789)
}

/// Past the last instant representable in i64 nanoseconds
pub fn beyond_nanos_range() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2263, 1, 1, 0, 0, 0).unwrap()
}
