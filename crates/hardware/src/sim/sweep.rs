//! Sweep driver.
//!
//! Replays a trace against every configuration of a [`SweepConfig`]. Each
//! configuration gets a freshly constructed cache and sees the whole trace from
//! the first event, so results are independent of sweep order.

use tracing::info;

use super::report::ResultRow;
use super::trace::TraceEvent;
use crate::cache::CacheSim;
use crate::common::error::{ConfigError, SimError};
use crate::config::{CacheConfig, SweepConfig};
use crate::stats::RunStats;

/// Replays `events` against a single cache configuration.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is not a valid cache geometry.
pub fn simulate(config: &CacheConfig, events: &[TraceEvent]) -> Result<ResultRow, ConfigError> {
    let mut cache = CacheSim::new(config)?;
    let mut stats = RunStats::default();

    for event in events {
        let outcome = cache.access(event.addr, event.kind.is_write());
        stats.record(outcome, config.block_bytes);
    }

    let row = ResultRow {
        config: *config,
        ways: cache.geometry().ways(),
        stats,
    };
    info!(
        size = config.size_bytes,
        block = config.block_bytes,
        placement = config.placement.code(),
        policy = config.write_policy.code(),
        hits = stats.hits,
        misses = stats.misses,
        "configuration done"
    );
    Ok(row)
}

/// Replays `events` against every configuration of `sweep`, in sweep order.
///
/// # Errors
///
/// Stops at the first invalid configuration and returns it as [`SimError::Config`].
pub fn run_sweep(sweep: &SweepConfig, events: &[TraceEvent]) -> Result<Vec<ResultRow>, SimError> {
    info!(configs = sweep.len(), events = events.len(), "starting sweep");
    let mut rows = Vec::with_capacity(sweep.len());
    for config in sweep.configs() {
        rows.push(simulate(&config, events)?);
    }
    Ok(rows)
}
