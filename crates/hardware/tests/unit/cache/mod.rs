//! Tests for the cache model.
