//! Set-Associative Cache Simulator.
//!
//! This module implements a configurable set-associative cache model. It decodes
//! each address into tag and set, probes the ways of that set, and on a miss fills
//! an invalid way or evicts the least recently used line. Write-back caches defer
//! memory updates until a dirty line is evicted; write-through caches send every
//! write to memory immediately and never hold dirty lines.

/// Cache replacement policy implementations.
pub mod policies;

use tracing::trace;

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::addr::CacheGeometry;
use crate::common::error::ConfigError;
use crate::config::{CacheConfig, WritePolicy};
use crate::stats::CacheStats;

/// Cache line entry containing tag, validity, and dirty bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Tag of the resident block; meaningful only when `valid`.
    pub tag: u64,
    /// Whether the line holds a block.
    pub valid: bool,
    /// Whether the line was written since install (write-back only).
    pub dirty: bool,
}

/// What a single access did, as seen by the memory side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessOutcome {
    /// The block was resident.
    pub hit: bool,
    /// A dirty line was evicted and must be written back.
    pub dirty_eviction: bool,
    /// The access was a write that goes straight to memory.
    pub write_through: bool,
}

impl AccessOutcome {
    /// Whether the caller must account for a block transfer to memory on this access.
    #[inline(always)]
    pub const fn requires_memory_write(&self) -> bool {
        self.dirty_eviction || self.write_through
    }

    /// Number of distinct block transfers to memory caused by this access.
    pub const fn memory_writes(&self) -> u64 {
        self.dirty_eviction as u64 + self.write_through as u64
    }
}

/// Cache simulator implementing a set-associative cache with LRU replacement.
///
/// Lines are stored flat; set `s` occupies `lines[s * ways .. (s + 1) * ways]`.
#[derive(Debug)]
pub struct CacheSim {
    config: CacheConfig,
    geometry: CacheGeometry,
    lines: Vec<CacheLine>,
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
}

impl CacheSim {
    /// Creates a cache with LRU replacement.
    ///
    /// Every line starts invalid and clean.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry is not valid (see [`CacheGeometry::new`]).
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        Self::with_policy(config, |g| {
            Box::new(LruPolicy::new(g.num_sets(), g.ways()))
        })
    }

    /// Creates a cache with a custom replacement policy.
    ///
    /// The geometry is derived from `config`, and `make_policy` builds the policy
    /// for that geometry, so the two cannot disagree.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry is not valid (see [`CacheGeometry::new`]).
    pub fn with_policy<F>(config: &CacheConfig, make_policy: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&CacheGeometry) -> Box<dyn ReplacementPolicy>,
    {
        let geometry = CacheGeometry::new(config.size_bytes, config.block_bytes, config.placement)?;
        let policy = make_policy(&geometry);
        Ok(Self {
            config: *config,
            geometry,
            lines: vec![CacheLine::default(); geometry.num_blocks()],
            policy,
            stats: CacheStats::default(),
        })
    }

    /// Configuration the cache was built from.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Derived geometry.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Hit/miss counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of hits so far.
    pub const fn hits(&self) -> u64 {
        self.stats.hits()
    }

    /// Number of misses so far.
    pub const fn misses(&self) -> u64 {
        self.stats.misses()
    }

    /// Fraction of accesses that hit, or 0.0 before the first access.
    pub fn hit_rate(&self) -> f64 {
        self.stats.hit_rate()
    }

    /// Returns the line at `way` of `set`, if both are in range.
    pub fn line(&self, set: usize, way: usize) -> Option<&CacheLine> {
        if set >= self.geometry.num_sets() || way >= self.geometry.ways() {
            return None;
        }
        self.lines.get(set * self.geometry.ways() + way)
    }

    /// Checks whether the block holding `addr` is resident.
    ///
    /// Does not touch statistics or recency.
    pub fn contains(&self, addr: u64) -> bool {
        let decoded = self.geometry.decode(addr);
        self.set_lines(decoded.set)
            .iter()
            .any(|line| line.valid && line.tag == decoded.tag)
    }

    /// Number of valid lines currently marked dirty.
    pub fn dirty_lines(&self) -> usize {
        self.lines.iter().filter(|l| l.valid && l.dirty).count()
    }

    fn set_lines(&self, set: usize) -> &[CacheLine] {
        let base = set * self.geometry.ways();
        &self.lines[base..base + self.geometry.ways()]
    }

    /// Accesses the cache for the specified address.
    ///
    /// Probes the set for a matching valid line. On a hit, a write either marks the
    /// line dirty (write-back) or is forwarded to memory (write-through). On a miss,
    /// the first invalid way is filled, or the replacement policy picks a victim; a
    /// dirty victim under write-back must be written back. The touched way then
    /// becomes most recently used.
    ///
    /// # Arguments
    ///
    /// * `addr` - The address to access
    /// * `is_write` - Whether this is a write operation
    ///
    /// # Returns
    ///
    /// The [`AccessOutcome`] describing hit status and required memory writes.
    pub fn access(&mut self, addr: u64, is_write: bool) -> AccessOutcome {
        let decoded = self.geometry.decode(addr);
        let ways = self.geometry.ways();
        let base = decoded.set * ways;
        let write_back = self.config.write_policy == WritePolicy::WriteBack;

        let mut outcome = AccessOutcome::default();
        let mut hit_way = None;
        let mut invalid_way = None;

        for way in 0..ways {
            let line = &self.lines[base + way];
            if !line.valid {
                if invalid_way.is_none() {
                    invalid_way = Some(way);
                }
                continue;
            }
            if line.tag == decoded.tag {
                hit_way = Some(way);
                break;
            }
        }

        let way = if let Some(way) = hit_way {
            self.stats.record_hit();
            outcome.hit = true;
            if is_write {
                if write_back {
                    self.lines[base + way].dirty = true;
                } else {
                    outcome.write_through = true;
                }
            }
            way
        } else {
            self.stats.record_miss();
            let way = match invalid_way {
                Some(way) => way,
                None => {
                    let victim = self.policy.get_victim(decoded.set);
                    let evicted = self.lines[base + victim];
                    if write_back && evicted.dirty {
                        outcome.dirty_eviction = true;
                    }
                    trace!(
                        set = decoded.set,
                        way = victim,
                        tag = evicted.tag,
                        dirty = evicted.dirty,
                        "evict"
                    );
                    victim
                }
            };

            self.lines[base + way] = CacheLine {
                tag: decoded.tag,
                valid: true,
                dirty: is_write && write_back,
            };
            if is_write && !write_back {
                outcome.write_through = true;
            }
            way
        };

        self.policy.update(decoded.set, way);

        debug_assert!(
            !(outcome.dirty_eviction && outcome.write_through),
            "write-through cache evicted a dirty line"
        );
        outcome
    }
}
