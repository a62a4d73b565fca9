//! Contract types for nullable scalars
//!
//! These types carry the presence/coercion/serialization contract:
//!
//! 1. **Absent by default**: every scalar starts without a value
//! 2. **Typed coercion**: inputs are accepted or rejected by kind, never by content
//! 3. **Null never leaks**: reads of an absent scalar yield the zero/null form
//!
//! ## Module Structure
//!
//! - `valid_flag`: Presence marker
//! - `precision`: Epoch unit markers for timestamps
//! - `timestamp`: Nullable timestamp and its precision aliases
//!
//! ## Usage
//!
//! ```
//! use nullscalar_core::contract::{NullableTimestamp, Nanos, TimestampNano, ValidFlag};
//! ```

pub mod precision;
pub mod timestamp;
pub mod valid_flag;

// Re-exports
pub use precision::{Micros, Millis, Nanos, Precision, Seconds};
pub use timestamp::{
    NullableTimestamp, TimestampMicro, TimestampMilli, TimestampNano, TimestampSec,
};
pub use valid_flag::ValidFlag;
