//! Sweep Driver Tests.
//!
//! Each configuration replays the whole trace on a fresh cache; rows come back
//! in sweep order.

use cachesim_core::common::{ConfigError, SimError};
use cachesim_core::config::{CacheConfig, Placement, SweepConfig, WritePolicy};
use cachesim_core::sim::{load_trace, run_sweep, simulate, write_results};
use pretty_assertions::assert_eq;

use crate::common::{SMALL_TRACE, init_tracing, trace_file};

#[test]
fn default_sweep_produces_every_row() {
    init_tracing();
    let file = trace_file(SMALL_TRACE);
    let events = load_trace(file.path()).unwrap();
    let rows = run_sweep(&SweepConfig::default(), &events).unwrap();

    assert_eq!(rows.len(), 128);
    for row in &rows {
        let s = row.stats;
        let block = row.config.block_bytes;
        assert_eq!(s.accesses, 5);
        assert_eq!(s.hits + s.misses, 5);
        assert_eq!(s.bytes_to_cache, s.misses * block);
        // Three blocks never conflict in caches this large, so nothing is written back.
        match row.config.write_policy {
            WritePolicy::WriteBack => assert_eq!(s.bytes_to_memory, 0),
            WritePolicy::WriteThrough => assert_eq!(s.bytes_to_memory, 3 * block),
        }
    }
}

#[test]
fn leading_rows_of_default_sweep() {
    let file = trace_file(SMALL_TRACE);
    let events = load_trace(file.path()).unwrap();
    let rows = run_sweep(&SweepConfig::default(), &events).unwrap();

    let mut out = Vec::new();
    write_results(&mut out, &rows[..3]).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1024 4 DM 1 WB 5 2 0.40 12 0\n\
         1024 4 DM 1 WT 5 2 0.40 12 12\n\
         1024 4 2W 2 WB 5 2 0.40 12 0\n"
    );
    // 8-byte blocks put 0x0 and 0x4 in the same block.
    assert_eq!(rows[8].to_string(), "1024 8 DM 1 WB 5 3 0.60 16 0");
}

#[test]
fn fresh_cache_per_configuration() {
    let events = load_trace(trace_file(SMALL_TRACE).path()).unwrap();
    let config = CacheConfig::new(2048, 32, Placement::TwoWay, WritePolicy::WriteBack);
    let first = simulate(&config, &events).unwrap();
    let second = simulate(&config, &events).unwrap();
    assert_eq!(first, second);
}

#[test]
fn thrashing_trace_writes_back() {
    // Direct-mapped 1 KiB: 0x0 and 0x400 share set 0.
    let events = load_trace(trace_file("write 0\nwrite 400\nwrite 0\nread 400\n").path()).unwrap();
    let wb = simulate(
        &CacheConfig::new(1024, 4, Placement::DirectMapped, WritePolicy::WriteBack),
        &events,
    )
    .unwrap();
    assert_eq!(wb.stats.misses, 4);
    assert_eq!(wb.stats.bytes_to_memory, 3 * 4);

    let wt = simulate(
        &CacheConfig::new(1024, 4, Placement::DirectMapped, WritePolicy::WriteThrough),
        &events,
    )
    .unwrap();
    assert_eq!(wt.stats.bytes_to_memory, 3 * 4);

    let two_way = simulate(
        &CacheConfig::new(1024, 4, Placement::TwoWay, WritePolicy::WriteBack),
        &events,
    )
    .unwrap();
    assert_eq!(two_way.stats.hits, 2);
    assert_eq!(two_way.stats.bytes_to_memory, 0);
}

#[test]
fn invalid_configuration_aborts_sweep() {
    let sweep = SweepConfig::from_json(r#"{ "cache_sizes": [1024, 1000] }"#).unwrap();
    let err = run_sweep(&sweep, &[]).unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::NotPowerOfTwo { value: 1000, .. })
    ));
}

#[test]
fn empty_trace_rows_are_zero() {
    let sweep = SweepConfig::from_json(r#"{ "cache_sizes": [1024], "block_sizes": [4] }"#).unwrap();
    let rows = run_sweep(&sweep, &[]).unwrap();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.stats.accesses == 0 && r.stats.hit_rate() == 0.0));
}
