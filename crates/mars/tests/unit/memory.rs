//! # Core Memory Tests
//!
//! Construction, wraparound access and the placement-block table.

use mars_core::common::error::ConfigError;
use mars_core::memory::CoreMemory;

#[test]
fn unusable_geometry_is_rejected() {
    assert!(matches!(CoreMemory::new(0, 1), Err(ConfigError::ZeroCoreSize)));
    assert!(matches!(CoreMemory::new(10, 0), Err(ConfigError::ZeroBlockSize)));
    assert!(matches!(
        CoreMemory::new(4, 8),
        Err(ConfigError::BlockLargerThanCore {
            block_size: 8,
            core_size: 4
        })
    ));
}

#[test]
fn read_write_wrap_both_ways() {
    let mut mem = CoreMemory::new(5, 5).unwrap();
    mem.write(-1, 7);
    assert_eq!(mem.cells()[4], 7);
    mem.write(6, 9);
    assert_eq!(mem.read(1), 9);
    assert_eq!(mem.read(-4), 9);
}

#[test]
fn block_table() {
    let mut mem = CoreMemory::new(21, 5).unwrap();
    assert_eq!(mem.block_count(), 4);
    assert!(mem.block(4).is_none());

    mem.mark_block(2);
    mem.mark_block(99);
    assert!(mem.is_block_occupied(2));
    assert!(!mem.is_block_occupied(99));
    assert_eq!(mem.free_blocks(), vec![0, 1, 3]);
    assert_eq!(mem.block(1).map(<[u32]>::len), Some(5));
}
