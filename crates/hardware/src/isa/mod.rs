//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the closed opcode set, the decoded instruction record, the static
//! program container, and the disassembler.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcodes and the decoded instruction record.
pub mod instruction;

/// Ordered, immutable program container.
pub mod program;

pub use instruction::{Instruction, Opcode};
pub use program::Program;
