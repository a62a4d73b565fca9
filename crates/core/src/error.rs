//! Error types for nullable scalars
//!
//! This module defines the error family used by every coercion and
//! serialization surface. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.
//!
//! There is one rejection kind, [`InvalidValueError`], raised whenever a
//! coercion receives an input outside its accepted set. Decode failures of
//! the JSON surface are reported as [`Error::Serialization`].

use crate::value::Value;
use thiserror::Error;

/// Result type alias for nullable scalar operations
pub type Result<T> = std::result::Result<T, Error>;

/// A rejected coercion input
///
/// The message names the *kind* of the offending value, never its content:
///
/// ```
/// use nullscalar_core::{InvalidValueError, Value};
///
/// let err = InvalidValueError::new(Value::from("secret"));
/// assert_eq!(err.to_string(), "invalid value: (string)");
///
/// let err = InvalidValueError::new(Value::Null);
/// assert_eq!(err.to_string(), "invalid value: (nil)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid value: ({})", .value.kind())]
pub struct InvalidValueError {
    /// The input that was rejected
    pub value: Value,
}

impl InvalidValueError {
    /// Wrap a rejected input
    pub fn new(value: impl Into<Value>) -> Self {
        InvalidValueError {
            value: value.into(),
        }
    }

    /// Kind name of the rejected input (`nil` for the absent value)
    pub fn kind(&self) -> &'static str {
        self.value.kind()
    }
}

/// Error types for nullable scalar operations
#[derive(Debug, Error)]
pub enum Error {
    /// Coercion rejected the input
    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Check if this error is an invalid-value rejection
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Error::InvalidValue(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Unwrap a result or abort the current operation with a panic
///
/// This is the only place a coercion failure becomes fatal. Callers that
/// want to recover must handle the `Result` themselves.
///
/// # Panics
///
/// Panics with the error's display text when `result` is `Err`.
#[track_caller]
pub fn must<T>(result: Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}
