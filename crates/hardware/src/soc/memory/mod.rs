//! Flat Main Memory.
//!
//! This module implements the system's main memory: a linear array of signed
//! 32-bit words addressed by word index. It provides:
//! 1. **Storage:** Zero-initialized words allocated once for the lifetime of the simulator.
//! 2. **Access:** The bounds-checked `WordMemory` contract used by the cache.
//! 3. **Setup:** Bulk preloading of data images before a run.

use crate::common::{SimError, SimResult};
use crate::soc::traits::WordMemory;

/// Word-addressed main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<i32>,
}

impl Memory {
    /// Creates a zero-filled memory of `size_words` words.
    pub fn new(size_words: usize) -> Self {
        Self {
            words: vec![0; size_words],
        }
    }

    /// Copies `data` into memory starting at word `base`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfBounds` for the first word that does not fit;
    /// nothing is written in that case.
    pub fn load(&mut self, base: u32, data: &[i32]) -> SimResult<()> {
        let start = base as usize;
        let end = start.saturating_add(data.len());
        if end > self.words.len() {
            let first_bad = start.max(self.words.len());
            return Err(SimError::MemoryOutOfBounds {
                addr: u32::try_from(first_bad).unwrap_or(u32::MAX),
                size: self.words.len(),
            });
        }
        self.words[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Zeroes every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Borrows the full contents.
    pub fn as_slice(&self) -> &[i32] {
        &self.words
    }

    fn check(&self, addr: u32) -> SimResult<usize> {
        let idx = addr as usize;
        if idx < self.words.len() {
            Ok(idx)
        } else {
            Err(SimError::MemoryOutOfBounds {
                addr,
                size: self.words.len(),
            })
        }
    }
}

impl WordMemory for Memory {
    fn len_words(&self) -> usize {
        self.words.len()
    }

    fn read(&self, addr: u32) -> SimResult<i32> {
        let idx = self.check(addr)?;
        Ok(self.words[idx])
    }

    fn write(&mut self, addr: u32, val: i32) -> SimResult<()> {
        let idx = self.check(addr)?;
        self.words[idx] = val;
        Ok(())
    }
}
