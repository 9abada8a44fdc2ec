//! Trace replay, parameter sweeps, and result reporting.
//!
//! Provides the pieces that surround the cache model: reading a memory-access
//! trace, replaying it against every configuration of a sweep, and writing
//! one result row per configuration.

/// Result rows and the result-file writer.
pub mod report;
/// Sweep driver: one fresh cache per configuration, full trace replay each time.
pub mod sweep;
/// Lazy trace-file reader.
pub mod trace;

pub use report::{ResultRow, write_results};
pub use sweep::{run_sweep, simulate};
pub use trace::{TraceEvent, TraceReader, load_trace};
