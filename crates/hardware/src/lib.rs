//! Trace-driven cache simulator library.
//!
//! This crate models a single set-associative cache replaying a memory-access trace:
//! 1. **Cache:** Address decoding, direct-mapped to fully associative placement, LRU
//!    replacement, and write-back / write-through dirty tracking.
//! 2. **Statistics:** Hit/miss counters and bytes moved to and from memory.
//! 3. **Simulation:** Trace reading, parameter sweeps, and result-row formatting.
//!
//! # Examples
//!
//! ```
//! use cachesim_core::{CacheConfig, CacheSim};
//! use cachesim_core::config::{Placement, WritePolicy};
//!
//! let config = CacheConfig::new(1024, 4, Placement::DirectMapped, WritePolicy::WriteBack);
//! let mut cache = CacheSim::new(&config).unwrap();
//! assert!(!cache.access(0x0, false).hit);
//! assert!(!cache.access(0x4, false).hit);
//! assert!(cache.access(0x0, false).hit);
//! assert_eq!(format!("{:.2}", cache.hit_rate()), "0.33");
//! ```

/// Set-associative cache model and replacement policies.
pub mod cache;
/// Common types (geometry and address decoding, access types, errors).
pub mod common;
/// Cache and sweep configuration (placement, write policy, defaults).
pub mod config;
/// Trace reader, sweep driver, and result reporting.
pub mod sim;
/// Hit/miss and traffic statistics.
pub mod stats;

/// Cache model; construct with `CacheSim::new`.
pub use crate::cache::{AccessOutcome, CacheSim};
/// Configuration of one cache instance.
pub use crate::config::{CacheConfig, SweepConfig};
