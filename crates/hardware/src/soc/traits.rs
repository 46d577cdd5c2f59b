//! Main memory access contract.
//!
//! This module defines the `WordMemory` trait the cache uses to reach backing
//! storage. It provides:
//! 1. **Access:** Word read and write at a non-negative word address.
//! 2. **Bounds:** Out-of-range addresses fail with `SimError::MemoryOutOfBounds`; there is no wraparound.
//!
//! The cache never owns an implementor; it is handed a borrow for each access.

use crate::common::SimResult;

/// Word-addressed backing store behind the cache.
pub trait WordMemory {
    /// Number of addressable words.
    fn len_words(&self) -> usize;

    /// Reads the word at `addr`.
    fn read(&self, addr: u32) -> SimResult<i32>;

    /// Writes `val` to the word at `addr`.
    fn write(&mut self, addr: u32, val: i32) -> SimResult<()>;
}
