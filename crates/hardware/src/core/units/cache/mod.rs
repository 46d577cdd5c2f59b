//! Direct-Mapped Write-Through Cache.
//!
//! This module implements the single-level data cache that sits between the
//! Execute stage and main memory. Each line holds one word:
//!
//! * `index = addr % num_lines`
//! * `tag   = addr / num_lines`
//!
//! A miss always installs the new line over whatever occupied the index. Stores
//! are written through to memory before the line is touched, so memory always
//! holds the newest value and an eviction never needs a write-back.

use tracing::debug;

use crate::config::CacheConfig;
use crate::common::SimResult;
use crate::soc::traits::WordMemory;

/// One cache slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether the line holds data.
    pub valid: bool,
    /// High-order address bits of the cached word.
    pub tag: u32,
    /// Cached word.
    pub data: i32,
}

/// Direct-mapped, write-through, write-allocate cache simulator.
///
/// The cache does not own main memory; every access borrows it from the caller.
#[derive(Clone, Debug)]
pub struct CacheSim {
    lines: Vec<CacheLine>,
    num_lines: u32,
    hit_latency: u64,
    miss_latency: u64,
    hits: u64,
    misses: u64,
}

impl CacheSim {
    /// Creates a cold cache with the given geometry and latencies.
    ///
    /// A `num_lines` of zero is clamped to one line; `Config::validate` rejects it earlier.
    pub fn new(config: &CacheConfig) -> Self {
        let num_lines = u32::try_from(config.num_lines.max(1)).unwrap_or(u32::MAX);
        Self {
            lines: vec![CacheLine::default(); num_lines as usize],
            num_lines,
            hit_latency: config.hit_latency,
            miss_latency: config.miss_latency,
            hits: 0,
            misses: 0,
        }
    }

    /// Line index an address maps to.
    #[inline]
    pub const fn index_of(&self, addr: u32) -> usize {
        (addr % self.num_lines) as usize
    }

    /// Tag stored for an address.
    #[inline]
    pub const fn tag_of(&self, addr: u32) -> u32 {
        addr / self.num_lines
    }

    /// Returns `true` if `addr` is currently cached.
    pub fn contains(&self, addr: u32) -> bool {
        let line = &self.lines[self.index_of(addr)];
        line.valid && line.tag == self.tag_of(addr)
    }

    /// Reads a word through the cache.
    ///
    /// # Returns
    ///
    /// `(value, latency)`. On a miss the word is read from `mem` and installed,
    /// evicting the previous occupant of the index.
    ///
    /// # Errors
    ///
    /// Propagates `SimError::MemoryOutOfBounds` from `mem` on a miss; the line is
    /// left untouched and no counter changes.
    pub fn load<M: WordMemory + ?Sized>(&mut self, mem: &M, addr: u32) -> SimResult<(i32, u64)> {
        let index = self.index_of(addr);
        let tag = self.tag_of(addr);
        let line = self.lines[index];

        if line.valid && line.tag == tag {
            self.hits += 1;
            debug!(addr, index, "cache hit on load");
            return Ok((line.data, self.hit_latency));
        }

        let value = mem.read(addr)?;
        self.misses += 1;
        if line.valid {
            debug!(addr, index, evicted_tag = line.tag, "cache miss on load, evicting");
        } else {
            debug!(addr, index, "cache miss on load");
        }
        self.lines[index] = CacheLine {
            valid: true,
            tag,
            data: value,
        };
        Ok((value, self.miss_latency))
    }

    /// Writes a word through the cache.
    ///
    /// Memory is updated first and unconditionally. A matching line is then
    /// updated in place (hit); otherwise a fresh line is installed (miss).
    ///
    /// # Returns
    ///
    /// The access latency.
    ///
    /// # Errors
    ///
    /// Propagates `SimError::MemoryOutOfBounds` from `mem`; the cache is unchanged.
    pub fn store<M: WordMemory + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
        value: i32,
    ) -> SimResult<u64> {
        mem.write(addr, value)?;

        let index = self.index_of(addr);
        let tag = self.tag_of(addr);
        let line = &mut self.lines[index];

        if line.valid && line.tag == tag {
            line.data = value;
            self.hits += 1;
            debug!(addr, index, "cache hit on store");
            return Ok(self.hit_latency);
        }

        *line = CacheLine {
            valid: true,
            tag,
            data: value,
        };
        self.misses += 1;
        debug!(addr, index, "cache miss on store");
        Ok(self.miss_latency)
    }

    /// Returns the line at `index`, or `None` past the end.
    pub fn line(&self, index: usize) -> Option<&CacheLine> {
        self.lines.get(index)
    }

    /// Number of lines.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Latency reported on a hit.
    pub const fn hit_latency(&self) -> u64 {
        self.hit_latency
    }

    /// Latency reported on a miss.
    pub const fn miss_latency(&self) -> u64 {
        self.miss_latency
    }

    /// Hits since the last reset.
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Misses since the last reset.
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Invalidates every line and clears the counters.
    pub fn reset(&mut self) {
        self.lines.fill(CacheLine::default());
        self.hits = 0;
        self.misses = 0;
    }
}
