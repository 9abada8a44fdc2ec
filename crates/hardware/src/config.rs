//! Configuration system for the cache simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** The baseline sweep (cache sizes, block sizes, policies) and file names.
//! 2. **Structures:** A single-cache configuration and the sweep over many of them.
//! 3. **Enums:** Placement (associativity) and write policy, with their short report codes.
//!
//! Sweeps are supplied as JSON (see [`SweepConfig::from_json`]) or use `SweepConfig::default()`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values reproduce the reference sweep when not explicitly overridden
/// in a JSON sweep file.
mod defaults {
    /// Cache capacities swept by default (1 KiB to 64 KiB).
    pub const CACHE_SIZES: [u64; 4] = [1024, 2048, 8192, 65536];

    /// Block sizes swept by default.
    pub const BLOCK_SIZES: [u64; 4] = [4, 8, 32, 256];

    /// Trace file read by the sweep when none is given.
    pub const TRACE_FILE: &str = "test.trace";

    /// Result file written by the sweep when none is given.
    pub const RESULT_FILE: &str = "test.result";
}

pub use defaults::{RESULT_FILE as DEFAULT_RESULT_FILE, TRACE_FILE as DEFAULT_TRACE_FILE};

/// Block placement policy.
///
/// Fixes how many sets the cache is divided into, and therefore how many ways
/// each set has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Placement {
    /// One line per set; every block has exactly one possible slot.
    #[serde(rename = "DM", alias = "DirectMapped", alias = "dm")]
    DirectMapped,
    /// Two lines per set.
    #[serde(rename = "2W", alias = "TwoWay", alias = "2w")]
    TwoWay,
    /// Four lines per set.
    #[serde(rename = "4W", alias = "FourWay", alias = "4w")]
    FourWay,
    /// A single set holding every line.
    #[serde(rename = "FA", alias = "FullyAssociative", alias = "fa")]
    FullyAssociative,
}

impl Placement {
    /// All placements in report order.
    pub const ALL: [Self; 4] = [
        Self::DirectMapped,
        Self::TwoWay,
        Self::FourWay,
        Self::FullyAssociative,
    ];

    /// Number of sets for a cache of `num_blocks` blocks.
    ///
    /// Returns 0 when the cache has fewer blocks than the placement has ways.
    pub const fn num_sets(self, num_blocks: u64) -> u64 {
        match self {
            Self::DirectMapped => num_blocks,
            Self::TwoWay => num_blocks / 2,
            Self::FourWay => num_blocks / 4,
            Self::FullyAssociative => 1,
        }
    }

    /// Fixed associativity of the placement, or `None` when it scales with the cache.
    pub const fn ways_hint(self) -> Option<u64> {
        match self {
            Self::DirectMapped => Some(1),
            Self::TwoWay => Some(2),
            Self::FourWay => Some(4),
            Self::FullyAssociative => None,
        }
    }

    /// Short code used in result rows (`DM`, `2W`, `4W`, `FA`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::DirectMapped => "DM",
            Self::TwoWay => "2W",
            Self::FourWay => "4W",
            Self::FullyAssociative => "FA",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Placement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dm" | "direct" | "direct-mapped" | "directmapped" => Ok(Self::DirectMapped),
            "2w" | "2way" | "two-way" | "twoway" => Ok(Self::TwoWay),
            "4w" | "4way" | "four-way" | "fourway" => Ok(Self::FourWay),
            "fa" | "full" | "fully-associative" | "fullyassociative" => Ok(Self::FullyAssociative),
            _ => Err(ConfigError::UnknownPlacement(s.to_string())),
        }
    }
}

/// Write policy governing when written data reaches memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum WritePolicy {
    /// Writes mark the line dirty; memory is updated when a dirty line is evicted.
    #[serde(rename = "WB", alias = "WriteBack", alias = "wb")]
    WriteBack,
    /// Every write is sent to memory immediately; lines are never dirty.
    #[serde(rename = "WT", alias = "WriteThrough", alias = "wt")]
    WriteThrough,
}

impl WritePolicy {
    /// Both policies in report order.
    pub const ALL: [Self; 2] = [Self::WriteBack, Self::WriteThrough];

    /// Short code used in result rows (`WB`, `WT`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::WriteBack => "WB",
            Self::WriteThrough => "WT",
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WritePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wb" | "write-back" | "writeback" => Ok(Self::WriteBack),
            "wt" | "write-through" | "writethrough" => Ok(Self::WriteThrough),
            _ => Err(ConfigError::UnknownWritePolicy(s.to_string())),
        }
    }
}

/// Configuration of a single cache instance.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{CacheConfig, Placement, WritePolicy};
///
/// let json = r#"{ "size_bytes": 8192, "block_bytes": 32, "placement": "4W", "write_policy": "WT" }"#;
/// let config: CacheConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.placement, Placement::FourWay);
/// assert_eq!(config.write_policy, WritePolicy::WriteThrough);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total capacity in bytes.
    pub size_bytes: u64,
    /// Block (line) size in bytes.
    pub block_bytes: u64,
    /// Placement policy.
    pub placement: Placement,
    /// Write policy.
    pub write_policy: WritePolicy,
}

impl CacheConfig {
    /// Bundles the four cache parameters.
    pub const fn new(
        size_bytes: u64,
        block_bytes: u64,
        placement: Placement,
        write_policy: WritePolicy,
    ) -> Self {
        Self {
            size_bytes,
            block_bytes,
            placement,
            write_policy,
        }
    }
}

/// Parameter space explored by the sweep driver.
///
/// Configurations are visited with cache size outermost, then block size, then
/// placement, then write policy. Fields omitted from a JSON sweep file take the
/// default sweep's values.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{SweepConfig, WritePolicy};
///
/// let sweep = SweepConfig::from_json(r#"{ "cache_sizes": [4096], "write_policies": ["WB"] }"#).unwrap();
/// assert_eq!(sweep.cache_sizes, vec![4096]);
/// assert_eq!(sweep.block_sizes, vec![4, 8, 32, 256]);
/// assert_eq!(sweep.write_policies, vec![WritePolicy::WriteBack]);
/// assert_eq!(sweep.len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SweepConfig {
    /// Cache capacities in bytes.
    #[serde(default = "SweepConfig::default_cache_sizes")]
    pub cache_sizes: Vec<u64>,
    /// Block sizes in bytes.
    #[serde(default = "SweepConfig::default_block_sizes")]
    pub block_sizes: Vec<u64>,
    /// Placement policies.
    #[serde(default = "SweepConfig::default_placements")]
    pub placements: Vec<Placement>,
    /// Write policies.
    #[serde(default = "SweepConfig::default_write_policies")]
    pub write_policies: Vec<WritePolicy>,
}

impl SweepConfig {
    fn default_cache_sizes() -> Vec<u64> {
        defaults::CACHE_SIZES.to_vec()
    }

    fn default_block_sizes() -> Vec<u64> {
        defaults::BLOCK_SIZES.to_vec()
    }

    fn default_placements() -> Vec<Placement> {
        Placement::ALL.to_vec()
    }

    fn default_write_policies() -> Vec<WritePolicy> {
        WritePolicy::ALL.to_vec()
    }

    /// Parses a sweep description from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or unknown policy codes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of configurations in the sweep.
    pub fn len(&self) -> usize {
        self.cache_sizes.len()
            * self.block_sizes.len()
            * self.placements.len()
            * self.write_policies.len()
    }

    /// Returns `true` if the sweep contains no configurations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the configurations in sweep order.
    pub fn configs(&self) -> impl Iterator<Item = CacheConfig> + '_ {
        self.cache_sizes.iter().flat_map(move |&size| {
            self.block_sizes.iter().flat_map(move |&block| {
                self.placements.iter().flat_map(move |&placement| {
                    self.write_policies
                        .iter()
                        .map(move |&policy| CacheConfig::new(size, block, placement, policy))
                })
            })
        })
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            cache_sizes: Self::default_cache_sizes(),
            block_sizes: Self::default_block_sizes(),
            placements: Self::default_placements(),
            write_policies: Self::default_write_policies(),
        }
    }
}
