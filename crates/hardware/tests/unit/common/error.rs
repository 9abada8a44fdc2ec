//! # Configuration Error Tests
//!
//! Invalid geometries and unknown policy names are reported as structured
//! errors at construction time.

use cachesim_core::CacheSim;
use cachesim_core::common::{CacheGeometry, ConfigError};
use cachesim_core::config::{CacheConfig, Placement, WritePolicy};

#[test]
fn zero_sizes_rejected() {
    assert_eq!(
        CacheGeometry::new(0, 4, Placement::DirectMapped),
        Err(ConfigError::ZeroSize)
    );
    assert_eq!(
        CacheGeometry::new(1024, 0, Placement::DirectMapped),
        Err(ConfigError::ZeroBlock)
    );
}

#[test]
fn non_power_of_two_rejected() {
    assert_eq!(
        CacheGeometry::new(1000, 4, Placement::DirectMapped),
        Err(ConfigError::NotPowerOfTwo {
            field: "cache size",
            value: 1000
        })
    );
    assert_eq!(
        CacheGeometry::new(1024, 12, Placement::TwoWay),
        Err(ConfigError::NotPowerOfTwo {
            field: "block size",
            value: 12
        })
    );
}

#[test]
fn block_larger_than_cache_rejected() {
    assert_eq!(
        CacheGeometry::new(64, 128, Placement::FullyAssociative),
        Err(ConfigError::BlockLargerThanCache {
            size: 64,
            block: 128
        })
    );
}

#[test]
fn too_few_blocks_for_associativity() {
    assert_eq!(
        CacheGeometry::new(256, 256, Placement::TwoWay),
        Err(ConfigError::IndivisibleSets { blocks: 1, ways: 2 })
    );
    // A single block is still a valid direct-mapped or fully associative cache.
    assert!(CacheGeometry::new(256, 256, Placement::DirectMapped).is_ok());
    assert!(CacheGeometry::new(256, 256, Placement::FullyAssociative).is_ok());
}

#[test]
fn cache_construction_surfaces_error() {
    let config = CacheConfig::new(1024, 3, Placement::FourWay, WritePolicy::WriteBack);
    let err = CacheSim::new(&config).unwrap_err();
    assert!(err.to_string().contains("block size must be a power of two"));
}

#[test]
fn unknown_policy_names() {
    let err = "8W".parse::<Placement>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownPlacement("8W".to_string()));
    assert!(err.to_string().contains("'8W'"));

    let err = "WA".parse::<WritePolicy>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownWritePolicy("WA".to_string()));
}
