//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 signed 32-bit
//! general-purpose registers. It provides:
//! 1. **Storage:** One word per register, all zero at power-on.
//! 2. **Invariant Enforcement:** Register `x0` always reads as zero; any value written
//!    to it is discarded by `zero_x0`, which the pipeline calls at the end of every cycle.
//! 3. **Observability:** A text dump of all registers for debugging and reports.

use std::fmt::Write as _;

use super::constants::{NUM_REGS, REG_ZERO};

/// General-purpose register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 32`. Instruction fields are range-checked when a
    /// program is built, so this only fires on host-side misuse.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// A write to `x0` is accepted here and wiped by the next `zero_x0`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx] = val;
    }

    /// Reads the stored value of a register without masking `x0`.
    ///
    /// Between a write to `x0` and the end-of-cycle `zero_x0` this may be non-zero.
    pub fn raw(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Resets `x0` to zero.
    pub fn zero_x0(&mut self) {
        self.regs[REG_ZERO] = 0;
    }

    /// Returns a copy of every register value, `x0` reported as zero.
    pub fn snapshot(&self) -> [i32; NUM_REGS] {
        let mut out = self.regs;
        out[REG_ZERO] = 0;
        out
    }

    /// Formats all registers, four per line.
    pub fn dump(&self) -> String {
        let regs = self.snapshot();
        let mut out = String::new();
        for row in (0..NUM_REGS).step_by(4) {
            for (i, val) in regs.iter().enumerate().skip(row).take(4) {
                let _ = write!(out, "x{i:<2}={val:<12}");
            }
            out.push('\n');
        }
        out
    }
}
