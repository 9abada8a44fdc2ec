//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Decoding:** Cache geometry and the tag/set/offset split of an address.
//! 2. **Memory Access:** Classification of trace operations (Read/Write).
//! 3. **Error Handling:** Configuration, trace, and top-level simulation errors.

/// Cache geometry and address decomposition.
pub mod addr;

/// Memory access type definitions.
pub mod data;

/// Error types for configuration, trace input, and sweep execution.
pub mod error;

pub use addr::{CacheGeometry, DecodedAddr};
pub use data::AccessType;
pub use error::{ConfigError, SimError, TraceError};
