//! Integration tests for the nullable scalar contract
//!
//! Exercised through the `nullscalar` facade, the way downstream code
//! uses it.

mod fixtures;

mod driver_value;
mod error_handling;
mod struct_embedding;
