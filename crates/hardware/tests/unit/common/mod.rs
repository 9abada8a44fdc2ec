//! Tests for shared types.


/// Configuration error reporting.
pub mod error;
