//! Pipelined core and direct-mapped cache simulator library.
//!
//! This crate implements a cycle-accurate model of a three-stage in-order core with the following:
//! 1. **Core:** Fetch, decode and execute stages with load-use stalls and branch flushes.
//! 2. **Memory:** A direct-mapped write-through data cache in front of flat word memory.
//! 3. **ISA:** A closed set of nine integer instructions, programs, and disassembly.
//! 4. **Simulation:** Run driver, program loader, configuration, and statistics collection.

/// Common types and constants (registers, errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (pipeline, execution units, memory access).
pub mod core;
/// Instruction set (opcodes, instructions, programs, disassembly).
pub mod isa;
/// Run driver and program loader.
pub mod sim;
/// Main memory and its access trait.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type shared by every fallible operation.
pub use crate::common::{SimError, SimResult};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline, cache, memory, and stats.
pub use crate::core::Cpu;
/// Program building blocks.
pub use crate::isa::{Instruction, Opcode, Program};
/// Run driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Run statistics snapshot.
pub use crate::stats::SimStats;
