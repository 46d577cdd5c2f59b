//! Global Simulator Constants.
//!
//! This module defines constants shared across the simulator. It includes:
//! 1. **Register Constants:** Register count and the hardwired-zero register index.
//! 2. **Memory Constants:** Default size of the word-addressed main memory.
//! 3. **Simulation Constants:** The default safety cap on simulated steps.

/// Number of architectural general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Index of the hardwired-zero register (`x0`).
pub const REG_ZERO: usize = 0;

/// Default main memory size in 32-bit words (1M words).
pub const DEFAULT_MEMORY_WORDS: usize = 1 << 20;

/// Default maximum number of cycle steps before a run is declared runaway.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;
