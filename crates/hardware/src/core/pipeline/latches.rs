//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the two latches of the three-stage pipeline:
//! Fetch → (IF/ID) → Decode → (ID/EX) → Execute.
//!
//! A latch holds at most one instruction. An empty latch is a bubble and has
//! no payload to misinterpret.

use std::fmt;

use crate::core::pipeline::signals::ControlSignals;
use crate::isa::Instruction;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter the instruction was fetched from.
    pub pc: i32,
    /// The fetched instruction.
    pub inst: Instruction,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter the instruction was fetched from.
    pub pc: i32,
    /// The decoded instruction.
    pub inst: Instruction,
    /// Control signals for Execute.
    pub ctrl: ControlSignals,
}

/// IF/ID latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IfId {
    /// Occupying instruction, `None` for a bubble.
    pub entry: Option<IfIdEntry>,
}

/// ID/EX latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdEx {
    /// Occupying instruction, `None` for a bubble.
    pub entry: Option<IdExEntry>,
}

impl IfId {
    /// Returns `true` if an instruction occupies the latch.
    pub const fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// Empties the latch.
    pub fn flush(&mut self) {
        self.entry = None;
    }
}

impl IdEx {
    /// Returns `true` if an instruction occupies the latch.
    pub const fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// Empties the latch.
    pub fn flush(&mut self) {
        self.entry = None;
    }
}

impl fmt::Display for IfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(e) => write!(f, "[{:>3}] {}", e.pc, e.inst),
            None => f.write_str("(bubble)"),
        }
    }
}

impl fmt::Display for IdEx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(e) => write!(f, "[{:>3}] {}", e.pc, e.inst),
            None => f.write_str("(bubble)"),
        }
    }
}
