//! Cache Replacement Policies.
//!
//! Implements the algorithm that selects victim lines in a set once every way
//! holds valid data. Filling invalid ways first is the controller's job; a policy
//! only ranks resident lines.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, tracked with per-way age ranks.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

use std::fmt::Debug;

/// Trait for cache replacement policies.
///
/// Defines the interface for updating usage state and selecting victim lines.
pub trait ReplacementPolicy: Debug + Send + Sync {
    /// Updates the policy state when a line is accessed.
    ///
    /// Called exactly once per access, for the way that hit or the way that
    /// received the new block.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way index within the set that was accessed.
    fn update(&mut self, set: usize, way: usize);

    /// Selects a victim line to evict from a specific set.
    ///
    /// Only consulted when every way of the set is valid.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    ///
    /// # Returns
    ///
    /// The index of the way to evict.
    fn get_victim(&mut self, set: usize) -> usize;
}
