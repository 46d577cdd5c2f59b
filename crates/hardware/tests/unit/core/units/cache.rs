//! Direct-Mapped Cache Tests.
//!
//! Covers address mapping, hit/miss accounting, conflict eviction, the
//! write-through policy, and fault propagation from main memory.

use mockall::predicate::eq;
use pipesim_core::common::SimError;
use pipesim_core::config::CacheConfig;
use pipesim_core::core::units::cache::{CacheLine, CacheSim};
use pipesim_core::soc::{Memory, WordMemory};
use pretty_assertions::assert_eq;

use crate::common::mocks::memory::MockWordMemory;

const HIT: u64 = 1;
const MISS: u64 = 10;

fn cache(num_lines: usize) -> CacheSim {
    CacheSim::new(&CacheConfig {
        num_lines,
        hit_latency: HIT,
        miss_latency: MISS,
    })
}

// ══════════════════════════════════════════════════════════
// 1. Address mapping
// ══════════════════════════════════════════════════════════

#[test]
fn index_and_tag_split_address() {
    let c = cache(64);
    assert_eq!(c.index_of(3), 3);
    assert_eq!(c.tag_of(3), 0);
    assert_eq!(c.index_of(67), 3);
    assert_eq!(c.tag_of(67), 1);
    assert_eq!(c.num_lines(), 64);
}

#[test]
fn cold_cache_has_no_valid_lines() {
    let c = cache(8);
    for i in 0..8 {
        assert_eq!(c.line(i), Some(&CacheLine::default()));
    }
    assert!(c.line(8).is_none());
}

// ══════════════════════════════════════════════════════════
// 2. Loads
// ══════════════════════════════════════════════════════════

#[test]
fn cold_load_misses_then_hits() {
    let mut mem = Memory::new(128);
    mem.write(5, 77).unwrap();
    let mut c = cache(64);

    assert_eq!(c.load(&mem, 5).unwrap(), (77, MISS));
    assert_eq!(c.load(&mem, 5).unwrap(), (77, HIT));
    assert_eq!((c.hits(), c.misses()), (1, 1));
    assert!(c.contains(5));
}

#[test]
fn same_index_different_tag_evicts() {
    let mut mem = Memory::new(256);
    mem.write(3, 30).unwrap();
    mem.write(67, 670).unwrap();
    let mut c = cache(64);

    assert_eq!(c.load(&mem, 3).unwrap(), (30, MISS));
    assert_eq!(c.load(&mem, 67).unwrap(), (670, MISS));
    assert!(!c.contains(3));
    assert_eq!(c.load(&mem, 3).unwrap(), (30, MISS));
    assert_eq!((c.hits(), c.misses()), (0, 3));
    assert_eq!(
        c.line(3),
        Some(&CacheLine {
            valid: true,
            tag: 0,
            data: 30
        })
    );
}

#[test]
fn hit_does_not_touch_memory() {
    let mut mock = MockWordMemory::new();
    let _ = mock
        .expect_read()
        .with(eq(9))
        .times(1)
        .returning(|_| Ok(42));
    let mut c = cache(16);

    assert_eq!(c.load(&mock, 9).unwrap(), (42, MISS));
    assert_eq!(c.load(&mock, 9).unwrap(), (42, HIT));
}

#[test]
fn out_of_bounds_load_leaves_cache_untouched() {
    let mem = Memory::new(4);
    let mut c = cache(4);
    let err = c.load(&mem, 4).unwrap_err();
    assert!(matches!(err, SimError::MemoryOutOfBounds { addr: 4, size: 4 }));
    assert_eq!((c.hits(), c.misses()), (0, 0));
    assert!(!c.contains(4));
}

// ══════════════════════════════════════════════════════════
// 3. Stores (write-through, allocate on miss)
// ══════════════════════════════════════════════════════════

#[test]
fn store_miss_installs_line() {
    let mut mem = Memory::new(64);
    let mut c = cache(16);

    assert_eq!(c.store(&mut mem, 2, 11).unwrap(), MISS);
    assert_eq!(mem.read(2).unwrap(), 11);
    assert_eq!(c.load(&mem, 2).unwrap(), (11, HIT));
}

#[test]
fn store_hit_still_writes_memory() {
    let mut mem = Memory::new(64);
    let mut c = cache(16);

    let _ = c.store(&mut mem, 5, 1).unwrap();
    assert_eq!(c.store(&mut mem, 5, 2).unwrap(), HIT);
    assert_eq!(mem.read(5).unwrap(), 2);
    assert_eq!(c.line(5).map(|l| l.data), Some(2));
    assert_eq!((c.hits(), c.misses()), (1, 1));
}

#[test]
fn every_store_is_written_through() {
    let mut mock = MockWordMemory::new();
    let _ = mock
        .expect_write()
        .with(eq(7), eq(100))
        .times(1)
        .returning(|_, _| Ok(()));
    let _ = mock
        .expect_write()
        .with(eq(7), eq(200))
        .times(1)
        .returning(|_, _| Ok(()));
    let _ = mock.expect_read().never();
    let mut c = cache(16);

    assert_eq!(c.store(&mut mock, 7, 100).unwrap(), MISS);
    assert_eq!(c.store(&mut mock, 7, 200).unwrap(), HIT);
    assert_eq!(c.load(&mock, 7).unwrap(), (200, HIT));
}

#[test]
fn failed_store_does_not_allocate() {
    let mut mock = MockWordMemory::new();
    let _ = mock
        .expect_write()
        .returning(|addr, _| Err(SimError::MemoryOutOfBounds { addr, size: 0 }));
    let mut c = cache(16);

    assert!(c.store(&mut mock, 3, 1).is_err());
    assert!(!c.contains(3));
    assert_eq!(c.misses(), 0);
}

#[test]
fn reset_invalidates_and_clears_counters() {
    let mut mem = Memory::new(16);
    let mut c = cache(4);
    let _ = c.load(&mem, 1).unwrap();
    let _ = c.store(&mut mem, 1, 5).unwrap();
    c.reset();
    assert_eq!((c.hits(), c.misses()), (0, 0));
    assert!(!c.contains(1));
}
