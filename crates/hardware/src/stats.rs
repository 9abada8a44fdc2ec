//! Simulation statistics collection.
//!
//! This module tracks the outcome counters of a simulated cache. It provides:
//! 1. **Cache counters:** Hits and misses, owned by the cache and read-only to callers.
//! 2. **Run accounting:** Accesses and bytes moved between the cache and memory for one
//!    replay of a trace against one configuration.

use crate::cache::AccessOutcome;

/// Hit/miss counters owned by a [`CacheSim`](crate::cache::CacheSim).
///
/// Only the cache's access path increments them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
}

impl CacheStats {
    #[inline(always)]
    pub(crate) const fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline(always)]
    pub(crate) const fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Number of accesses that found their block resident.
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of accesses that had to install their block.
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Total accesses observed.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, or 0.0 before the first access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Traffic and outcome totals for one trace replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Accesses replayed.
    pub accesses: u64,
    /// Accesses that hit.
    pub hits: u64,
    /// Accesses that missed.
    pub misses: u64,
    /// Bytes filled into the cache (one block per miss).
    pub bytes_to_cache: u64,
    /// Bytes written to memory (one block per access that required a memory write).
    pub bytes_to_memory: u64,
}

impl RunStats {
    /// Folds one access outcome into the totals.
    ///
    /// # Arguments
    ///
    /// * `outcome` - Result of the access.
    /// * `block_bytes` - Block size of the cache that produced it.
    pub const fn record(&mut self, outcome: AccessOutcome, block_bytes: u64) {
        self.accesses += 1;
        if outcome.hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.bytes_to_cache += block_bytes;
        }
        if outcome.requires_memory_write() {
            self.bytes_to_memory += block_bytes;
        }
    }

    /// Fraction of accesses that hit, or 0.0 for an empty run.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}
