//! Nullable timestamp type
//!
//! A [`NullableTimestamp`] is an optional instant with an explicit presence
//! flag. Its integer surfaces (weak value, driver value, JSON) report the
//! instant as a signed 64-bit count of the precision marker's unit since the
//! Unix epoch.
//!
//! ## Coercion policy
//!
//! | Input | `try_new` | `set` / `scan` |
//! |-------|-----------|----------------|
//! | `Value::Null` | rejected | absent, `Ok` |
//! | `Value::Instant` | present | present |
//! | `Value::Int` | rejected | present, read as units since epoch |
//! | anything else | rejected | absent, rejected |
//!
//! Text is never parsed by the coercions, even when it looks numeric.
//!
//! ## Null encodings
//!
//! An absent timestamp serializes to JSON `null`, but renders as `"0"`
//! through `Display` and `as_i64`. Both encodings are part of the contract.
//!
//! ```
//! use nullscalar_core::TimestampNano;
//!
//! let mut ts = TimestampNano::default();
//! ts.set(1_367_059_792i64).unwrap();
//! assert_eq!(ts.to_string(), "1367059792");
//!
//! ts.set(()).unwrap();
//! assert_eq!(ts.to_string(), "0");
//! assert_eq!(ts.to_json().unwrap(), b"null");
//! ```

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use super::precision::{Micros, Millis, Nanos, Precision, Seconds};
use super::valid_flag::ValidFlag;
use crate::error::{must, Error, InvalidValueError, Result};
use crate::traits::NullableScalar;
use crate::value::Value;

/// Timestamp counted in whole seconds
pub type TimestampSec = NullableTimestamp<Seconds>;

/// Timestamp counted in milliseconds
pub type TimestampMilli = NullableTimestamp<Millis>;

/// Timestamp counted in microseconds
pub type TimestampMicro = NullableTimestamp<Micros>;

/// Timestamp counted in nanoseconds
pub type TimestampNano = NullableTimestamp<Nanos>;

/// Optional instant with an explicit presence flag
///
/// ## Invariants
///
/// - The default value is absent
/// - Reads of an absent timestamp yield the zero/null representation,
///   never a previously stored instant
/// - A present timestamp always holds an instant whose unit count fits
///   in `i64` (unless built through [`from_parts`](Self::from_parts))
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableTimestamp<P: Precision> {
    valid: ValidFlag,
    instant: DateTime<Utc>,
    _unit: PhantomData<P>,
}

impl<P: Precision> NullableTimestamp<P> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an absent timestamp
    pub fn null() -> Self {
        Self::default()
    }

    /// Build directly from a flag and an instant, bypassing coercion
    ///
    /// Intended for fixtures. A present instant outside the unit's `i64`
    /// range reads back as `0`.
    pub fn from_parts(valid: impl Into<ValidFlag>, instant: DateTime<Utc>) -> Self {
        NullableTimestamp {
            valid: valid.into(),
            instant,
            _unit: PhantomData,
        }
    }

    /// Create a present timestamp from an instant
    ///
    /// Only `Value::Instant` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValueError`] for every other kind, and for instants
    /// whose unit count overflows `i64`.
    pub fn try_new(value: impl Into<Value>) -> Result<Self> {
        match value.into() {
            Value::Instant(t) if P::to_units(&t).is_some() => Ok(Self::present(t)),
            other => Err(Self::rejected(other)),
        }
    }

    /// Create a present timestamp, aborting on rejection
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidValueError`] message whenever
    /// [`try_new`](Self::try_new) would fail.
    #[track_caller]
    pub fn new_or_panic(value: impl Into<Value>) -> Self {
        must(Self::try_new(value))
    }

    /// Create a timestamp from a value read back from storage
    ///
    /// Follows the [`scan`](Self::scan) policy.
    pub fn from_driver_value(value: impl Into<Value>) -> Result<Self> {
        let mut ts = Self::default();
        ts.scan(value)?;
        Ok(ts)
    }

    fn present(instant: DateTime<Utc>) -> Self {
        Self::from_parts(ValidFlag::PRESENT, instant)
    }

    // =========================================================================
    // Coercion
    // =========================================================================

    /// Replace the content from a loosely typed input
    ///
    /// `Null` clears the timestamp. An instant is stored verbatim and an
    /// integer is read as units since the epoch.
    ///
    /// # Errors
    ///
    /// Any other kind (including numeric-looking text) clears the timestamp
    /// and returns [`InvalidValueError`]. Out-of-range instants and integers
    /// are rejected the same way.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        match value.into() {
            Value::Null => {
                self.reset();
                Ok(())
            }
            Value::Instant(t) if P::to_units(&t).is_some() => {
                self.store(t);
                Ok(())
            }
            Value::Int(units) => match P::from_units(units) {
                Some(t) => {
                    self.store(t);
                    Ok(())
                }
                None => self.reject(Value::Int(units)),
            },
            other => self.reject(other),
        }
    }

    /// Replace the content from a storage driver value
    ///
    /// Accepts the same kinds as [`set`](Self::set).
    pub fn scan(&mut self, value: impl Into<Value>) -> Result<()> {
        self.set(value)
    }

    /// Mark the timestamp absent and drop the stored instant
    pub fn reset(&mut self) {
        self.valid.reset();
        self.instant = DateTime::default();
    }

    fn store(&mut self, instant: DateTime<Utc>) {
        self.instant = instant;
        self.valid = ValidFlag::PRESENT;
    }

    fn reject(&mut self, value: Value) -> Result<()> {
        self.reset();
        Err(Self::rejected(value))
    }

    fn rejected(value: Value) -> Error {
        debug!(
            target: "nullscalar::coerce",
            kind = value.kind(),
            unit = P::UNIT,
            "Rejected value"
        );
        InvalidValueError::new(value).into()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Check if an instant is present
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid.is_set()
    }

    /// Get the presence flag
    #[inline]
    pub fn valid_flag(&self) -> ValidFlag {
        self.valid
    }

    /// Get the instant, if present
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        if self.is_valid() {
            Some(self.instant)
        } else {
            None
        }
    }

    /// `Null` when absent, otherwise `Int` with the unit count
    pub fn weak(&self) -> Value {
        if self.is_valid() {
            Value::Int(self.as_i64())
        } else {
            Value::Null
        }
    }

    /// Unit count since the epoch, `0` when absent
    pub fn as_i64(&self) -> i64 {
        self.instant().and_then(|t| P::to_units(&t)).unwrap_or(0)
    }

    /// [`as_i64`](Self::as_i64) narrowed to the platform integer width
    pub fn as_isize(&self) -> isize {
        self.as_i64() as isize
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Value handed to a storage driver: `Null` or `Int`
    ///
    /// Never fails.
    pub fn driver_value(&self) -> Result<Value> {
        Ok(self.weak())
    }

    /// Encode as JSON: `null` when absent, a bare integer otherwise
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from JSON
    ///
    /// Empty input and `null` leave the timestamp absent. A quoted RFC 3339
    /// string or a bare integer unit count makes it present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] for anything else. The timestamp is
    /// left absent on failure.
    pub fn from_json(&mut self, data: &[u8]) -> Result<()> {
        if data.iter().all(u8::is_ascii_whitespace) {
            self.reset();
            return Ok(());
        }
        match serde_json::from_slice::<Self>(data) {
            Ok(parsed) => {
                *self = parsed;
                Ok(())
            }
            Err(e) => {
                debug!(
                    target: "nullscalar::json",
                    error = %e,
                    unit = P::UNIT,
                    "Rejected JSON timestamp"
                );
                self.reset();
                Err(e.into())
            }
        }
    }
}

// Absent timestamps compare equal whatever instant they last held.
impl<P: Precision> PartialEq for NullableTimestamp<P> {
    fn eq(&self, other: &Self) -> bool {
        self.instant() == other.instant()
    }
}

impl<P: Precision> Eq for NullableTimestamp<P> {}

impl<P: Precision> fmt::Display for NullableTimestamp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl<P: Precision> NullableScalar for NullableTimestamp<P> {
    fn is_valid(&self) -> bool {
        NullableTimestamp::is_valid(self)
    }

    fn reset(&mut self) {
        NullableTimestamp::reset(self)
    }

    fn set(&mut self, value: Value) -> Result<()> {
        NullableTimestamp::set(self, value)
    }

    fn weak(&self) -> Value {
        NullableTimestamp::weak(self)
    }

    fn driver_value(&self) -> Result<Value> {
        NullableTimestamp::driver_value(self)
    }
}

// ============================================================================
// serde
// ============================================================================

impl<P: Precision> Serialize for NullableTimestamp<P> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_valid() {
            serializer.serialize_i64(self.as_i64())
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, P: Precision> Deserialize<'de> for NullableTimestamp<P> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(TimestampVisitor(PhantomData))
    }
}

struct TimestampVisitor<P>(PhantomData<P>);

impl<'de, P: Precision> Visitor<'de> for TimestampVisitor<P> {
    type Value = NullableTimestamp<P>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "null, an RFC 3339 timestamp or an integer count of {}",
            P::UNIT
        )
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(NullableTimestamp::null())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(NullableTimestamp::null())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        P::from_units(v)
            .map(NullableTimestamp::present)
            .ok_or_else(|| E::custom(InvalidValueError::new(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        let units =
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))?;
        self.visit_i64(units)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        let instant = DateTime::parse_from_rfc3339(v)
            .map_err(E::custom)?
            .with_timezone(&Utc);
        NullableTimestamp::try_new(instant).map_err(E::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
