//! Cache geometry and address decomposition.
//!
//! This module derives the fixed shape of a cache from its configuration and splits
//! addresses into the fields used to index it. It provides the following:
//! 1. **Geometry:** Block, set, and way counts plus the bit widths derived from them.
//! 2. **Validation:** Rejects geometries whose bit widths would not be integral.
//! 3. **Decoding:** The tag / set index / block offset split of a 64-bit address.

use super::error::ConfigError;
use crate::config::Placement;

/// An address split into the fields used to index a cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddr {
    /// High-order bits identifying the block within its set.
    pub tag: u64,
    /// Set the block maps to.
    pub set: usize,
    /// Byte offset within the block.
    pub offset: u64,
}

/// Derived, immutable shape of a cache.
///
/// Every quantity here is fixed for the lifetime of the cache. Construction checks
/// that the capacity, the block size, and the set count are powers of two, so every
/// bit width is exact and every decoded set index is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheGeometry {
    size_bytes: u64,
    block_bytes: u64,
    num_blocks: usize,
    num_sets: usize,
    ways: usize,
    offset_bits: u32,
    set_bits: u32,
    set_mask: u64,
    tag_shift: u32,
}

impl CacheGeometry {
    /// Derives the geometry of a cache.
    ///
    /// # Arguments
    ///
    /// * `size_bytes` - Total capacity in bytes.
    /// * `block_bytes` - Block (line) size in bytes.
    /// * `placement` - Placement policy, which fixes the number of sets.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either size is zero or not a power of two, if the
    /// block does not fit in the cache, or if the placement needs more ways than the
    /// cache has blocks.
    pub fn new(size_bytes: u64, block_bytes: u64, placement: Placement) -> Result<Self, ConfigError> {
        if size_bytes == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if block_bytes == 0 {
            return Err(ConfigError::ZeroBlock);
        }
        if !size_bytes.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "cache size",
                value: size_bytes,
            });
        }
        if !block_bytes.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "block size",
                value: block_bytes,
            });
        }
        if block_bytes > size_bytes {
            return Err(ConfigError::BlockLargerThanCache {
                size: size_bytes,
                block: block_bytes,
            });
        }

        let num_blocks = size_bytes / block_bytes;
        let num_sets = placement.num_sets(num_blocks);
        if num_sets == 0 || num_blocks % num_sets != 0 {
            return Err(ConfigError::IndivisibleSets {
                blocks: num_blocks,
                ways: placement.ways_hint().unwrap_or(num_blocks),
            });
        }
        if !num_sets.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "set count",
                value: num_sets,
            });
        }

        let offset_bits = block_bytes.trailing_zeros();
        let set_bits = num_sets.trailing_zeros();

        Ok(Self {
            size_bytes,
            block_bytes,
            num_blocks: num_blocks as usize,
            num_sets: num_sets as usize,
            ways: (num_blocks / num_sets) as usize,
            offset_bits,
            set_bits,
            set_mask: (1u64 << set_bits) - 1,
            tag_shift: offset_bits + set_bits,
        })
    }

    /// Splits an address into tag, set index, and block offset.
    ///
    /// `set = (addr >> offset_bits) & set_mask` and `tag = addr >> tag_shift`. A fully
    /// associative cache has zero set bits, so the mask is zero and every address lands
    /// in set 0 without special handling.
    #[inline]
    pub const fn decode(&self, addr: u64) -> DecodedAddr {
        DecodedAddr {
            tag: addr >> self.tag_shift,
            set: ((addr >> self.offset_bits) & self.set_mask) as usize,
            offset: addr & (self.block_bytes - 1),
        }
    }

    /// Total capacity in bytes.
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Block size in bytes.
    pub const fn block_bytes(&self) -> u64 {
        self.block_bytes
    }

    /// Number of blocks (lines) in the cache.
    pub const fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Lines per set (associativity).
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Width of the block offset field.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Width of the set index field.
    pub const fn set_bits(&self) -> u32 {
        self.set_bits
    }

    /// Mask applied to the shifted address to obtain the set index.
    pub const fn set_mask(&self) -> u64 {
        self.set_mask
    }

    /// Shift that isolates the tag (`offset_bits + set_bits`).
    pub const fn tag_shift(&self) -> u32 {
        self.tag_shift
    }
}
