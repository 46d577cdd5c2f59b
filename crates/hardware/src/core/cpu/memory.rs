//! Memory Access Helpers.
//!
//! This module provides the interface between the Execute stage and the memory
//! subsystem. It performs the following:
//! 1. **Cache Simulation:** Routes every data access through the L1 data cache.
//! 2. **Latency Modeling:** Accumulates the reported latency and, when enabled,
//!    freezes the pipeline until the access would have completed.
//! 3. **Inspection:** Reads memory words directly for tests and reporting.

use super::Cpu;
use crate::common::SimResult;
use crate::soc::WordMemory;

impl Cpu {
    /// Loads a data word through the cache.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfBounds` for an address past main memory.
    pub fn load_data(&mut self, addr: u32) -> SimResult<i32> {
        let (value, latency) = self.l1_d_cache.load(&self.memory, addr)?;
        self.account_access(latency);
        Ok(value)
    }

    /// Stores a data word through the cache (write-through).
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfBounds` for an address past main memory.
    pub fn store_data(&mut self, addr: u32, value: i32) -> SimResult<()> {
        let latency = self.l1_d_cache.store(&mut self.memory, addr, value)?;
        self.account_access(latency);
        Ok(())
    }

    /// Reads a word of main memory without touching the cache.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfBounds` for an address past main memory.
    pub fn mem_word(&self, addr: u32) -> SimResult<i32> {
        self.memory.read(addr)
    }

    /// Copies `data` into main memory starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfBounds` if the block does not fit.
    pub fn load_memory(&mut self, base: u32, data: &[i32]) -> SimResult<()> {
        self.memory.load(base, data)
    }

    fn account_access(&mut self, latency: u64) {
        self.stats.cache_hits = self.l1_d_cache.hits();
        self.stats.cache_misses = self.l1_d_cache.misses();
        self.stats.mem_latency_cycles += latency;
        if self.model_memory_latency {
            self.stall_cycles = latency.saturating_sub(1);
        }
    }
}
