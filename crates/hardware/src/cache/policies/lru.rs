//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been accessed for the longest time.
//! Each way carries an age rank: 0 is the most recently used line and larger ranks
//! are older. When a way with rank `r` is touched, every way of the set whose rank
//! is at most `r` ages by one, then the touched way drops to 0. Once a set is full
//! its ranks are always a permutation of `0..ways`.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(W) where W is the number of ways (associativity)
//!   - `get_victim()`: O(W)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Hardware Cost:** High - requires a rank comparator per way
//! - **Best Case:** Working sets that fit in a set, with good temporal locality
//! - **Worst Case:** Cyclic scans one line larger than the set (thrashing)

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Age rank per line, flat `set * ways + way`. Index 0 within a set is way 0.
    ranks: Vec<u32>,
    ways: usize,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with every rank at 0.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            ranks: vec![0; sets * ways],
            ways,
        }
    }

    /// Current age rank of a way (0 = most recently used).
    pub fn rank(&self, set: usize, way: usize) -> u32 {
        self.ranks[set * self.ways + way]
    }

    /// Age ranks of every way in a set, in way order.
    pub fn ranks(&self, set: usize) -> &[u32] {
        let base = set * self.ways;
        &self.ranks[base..base + self.ways]
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Ages every way no older than the touched one, then marks it most recent.
    fn update(&mut self, set: usize, way: usize) {
        let base = set * self.ways;
        let ranks = &mut self.ranks[base..base + self.ways];
        let old = ranks[way];
        for rank in ranks.iter_mut() {
            if *rank <= old {
                *rank += 1;
            }
        }
        ranks[way] = 0;
    }

    /// Returns the oldest way; on equal ranks the lowest way index wins.
    fn get_victim(&mut self, set: usize) -> usize {
        let mut victim = 0;
        let mut oldest = 0;
        for (way, &rank) in self.ranks(set).iter().enumerate() {
            if way == 0 || rank > oldest {
                oldest = rank;
                victim = way;
            }
        }
        victim
    }
}
