//! Core trait for nullable scalars
//!
//! This module defines the NullableScalar trait: the contract every optional
//! scalar shares regardless of the kind it wraps. Storage code can hold a
//! `&mut dyn NullableScalar` and move values in and out without knowing the
//! concrete type.

use crate::error::Result;
use crate::value::Value;

/// Optional scalar with an explicit presence flag
///
/// Implementations decide which [`Value`] kinds they accept; every rejected
/// kind must surface as [`InvalidValueError`](crate::InvalidValueError) and
/// leave the scalar absent.
pub trait NullableScalar {
    /// Check if a value is present
    fn is_valid(&self) -> bool;

    /// Mark the scalar absent
    fn reset(&mut self);

    /// Replace the content from a loosely typed input
    ///
    /// `Value::Null` must always be accepted and leave the scalar absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValueError` for kinds outside the accepted set.
    fn set(&mut self, value: Value) -> Result<()>;

    /// `Value::Null` when absent, otherwise the scalar in its loosest form
    fn weak(&self) -> Value;

    /// Value handed to a storage driver
    fn driver_value(&self) -> Result<Value>;

    /// Replace the content from a value read back from storage
    ///
    /// Defaults to the [`set`](NullableScalar::set) policy.
    fn scan(&mut self, value: Value) -> Result<()> {
        self.set(value)
    }
}
