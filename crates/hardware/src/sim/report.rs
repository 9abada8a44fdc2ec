//! Result rows and the result-file format.
//!
//! Each configuration of a sweep produces one whitespace-separated line:
//!
//! ```text
//! size block placement ways policy accesses hits hit_rate bytes_to_cache bytes_to_memory
//! 1024 4 DM 1 WB 3 1 0.33 8 0
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::config::CacheConfig;
use crate::stats::RunStats;

/// Outcome of replaying a trace against one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultRow {
    /// Configuration that was simulated.
    pub config: CacheConfig,
    /// Ways per set of the simulated cache.
    pub ways: usize,
    /// Access and traffic totals.
    pub stats: RunStats,
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {:.2} {} {}",
            self.config.size_bytes,
            self.config.block_bytes,
            self.config.placement.code(),
            self.ways,
            self.config.write_policy.code(),
            self.stats.accesses,
            self.stats.hits,
            self.stats.hit_rate(),
            self.stats.bytes_to_cache,
            self.stats.bytes_to_memory,
        )
    }
}

/// Writes one line per row.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_results<W: Write>(out: &mut W, rows: &[ResultRow]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{row}")?;
    }
    out.flush()
}
