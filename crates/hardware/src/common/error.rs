//! Error definitions for the cache simulator.
//!
//! This module defines the failure modes of the simulator. It provides:
//! 1. **Configuration Errors:** Unknown policies and geometries that do not yield
//!    power-of-two bit widths. These are reported at cache construction.
//! 2. **Trace Errors:** I/O failures while reading a trace. Malformed lines are not
//!    errors; the reader skips them.
//! 3. **Simulation Errors:** The union of the above plus sweep-file and output failures,
//!    used by the sweep driver and the CLI.

use thiserror::Error;

/// Invalid cache configuration.
///
/// Raised by [`CacheGeometry::new`](crate::common::CacheGeometry::new) and
/// [`CacheSim::new`](crate::cache::CacheSim::new); the access path itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Placement string is not one of DM, 2W, 4W, FA (or their long names).
    #[error("unknown placement policy '{0}' (expected DM, 2W, 4W or FA)")]
    UnknownPlacement(String),

    /// Write policy string is not one of WB, WT (or their long names).
    #[error("unknown write policy '{0}' (expected WB or WT)")]
    UnknownWritePolicy(String),

    /// Cache capacity of zero bytes.
    #[error("cache size must be non-zero")]
    ZeroSize,

    /// Block size of zero bytes.
    #[error("block size must be non-zero")]
    ZeroBlock,

    /// A size or the derived set count is not a power of two.
    #[error("{field} must be a power of two (got {value})")]
    NotPowerOfTwo {
        /// Which quantity failed the check.
        field: &'static str,
        /// The offending value.
        value: u64,
    },

    /// Block does not fit in the cache.
    #[error("block size {block} exceeds cache size {size}")]
    BlockLargerThanCache {
        /// Cache capacity in bytes.
        size: u64,
        /// Block size in bytes.
        block: u64,
    },

    /// Placement needs more ways than the cache has blocks.
    #[error("{blocks} blocks cannot be divided into sets of {ways} ways")]
    IndivisibleSets {
        /// Number of blocks in the cache.
        blocks: u64,
        /// Ways per set required by the placement policy.
        ways: u64,
    },
}

/// Failure while reading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Underlying reader failed.
    #[error("trace read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for sweeps and the command-line driver.
#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration in the sweep is invalid.
    #[error("invalid cache configuration: {0}")]
    Config(#[from] ConfigError),

    /// The trace could not be read.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// The sweep description could not be parsed.
    #[error("invalid sweep file: {0}")]
    SweepFile(#[from] serde_json::Error),

    /// Result output or file open failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
