//! Tests for the simulation layer.


/// Sweep ordering and per-configuration replay.
pub mod sweep;

/// Trace file reading.
pub mod trace;
