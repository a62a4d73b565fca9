//! Presence marker for nullable scalars

use serde::{Deserialize, Serialize};

/// Whether a nullable scalar currently holds a value
///
/// `false` (the default) means absent. The owning scalar sets it only after
/// a successful coercion; [`reset`](ValidFlag::reset) is the one mutation the
/// flag itself offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidFlag(bool);

impl ValidFlag {
    /// The absent state
    pub const ABSENT: ValidFlag = ValidFlag(false);

    /// The present state
    pub const PRESENT: ValidFlag = ValidFlag(true);

    /// Mark the value as absent, whatever the prior state
    #[inline]
    pub fn reset(&mut self) {
        self.0 = false;
    }

    /// Check if a value is present
    #[inline]
    pub const fn is_set(&self) -> bool {
        self.0
    }
}

impl From<bool> for ValidFlag {
    fn from(valid: bool) -> Self {
        ValidFlag(valid)
    }
}

impl From<ValidFlag> for bool {
    fn from(flag: ValidFlag) -> Self {
        flag.0
    }
}
