//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, the program counter, and the halt flag.
//! 2. **Pipeline Control:** Owns the IF/ID and ID/EX latches and the pending redirect.
//! 3. **Memory Hierarchy:** Integrates the data cache in front of main memory.
//! 4. **Statistics:** Accumulates the counters reported at the end of a run.

/// Instruction execution orchestration and pipeline coordination.
pub mod execution;

/// Memory access handling and load/store operations.
pub mod memory;

use crate::common::{RegisterFile, SimResult};
use crate::config::Config;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::units::cache::CacheSim;
use crate::isa::Program;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// The CPU advances the three-stage pipeline one cycle per `tick`, reading
/// instructions from an immutable program and data from main memory through a
/// direct-mapped cache.
#[derive(Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Program Counter of the next instruction to fetch.
    pub pc: i32,
    /// Instruction memory, fixed for the lifetime of the core.
    pub program: Program,
    /// Main data memory.
    pub memory: Memory,
    /// L1 Data Cache.
    pub l1_d_cache: CacheSim,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// Target of a taken branch or jump, applied at the start of the next cycle.
    pub redirect: Option<i32>,
    /// Set once a HALT has executed.
    pub halted: bool,

    /// Performance statistics.
    pub stats: SimStats,
    /// Emit a pipeline diagram each cycle.
    pub trace: bool,
    /// Fail on unrecognized opcodes instead of executing them as NOP.
    pub strict_opcodes: bool,
    /// Freeze the pipeline while a cache access completes.
    pub model_memory_latency: bool,
    /// Remaining cycles the pipeline stays frozen.
    pub stall_cycles: u64,
}

impl Cpu {
    /// Creates a new CPU instance for the given program and configuration.
    ///
    /// # Arguments
    ///
    /// * `program` - The instruction sequence to run, starting at PC 0.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if `config` fails validation.
    pub fn new(program: Program, config: &Config) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            regs: RegisterFile::new(),
            pc: 0,
            program,
            memory: Memory::new(config.memory.size_words),
            l1_d_cache: CacheSim::new(&config.cache),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            redirect: None,
            halted: false,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            strict_opcodes: config.general.strict_opcodes,
            model_memory_latency: config.pipeline.model_memory_latency,
            stall_cycles: 0,
        })
    }

    /// Returns the core to its power-on state.
    ///
    /// Registers, PC, latches, main memory, cache lines and statistics are all
    /// cleared. The program and configuration are kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.pc = 0;
        self.memory.clear();
        self.l1_d_cache.reset();
        self.if_id.flush();
        self.id_ex.flush();
        self.redirect = None;
        self.halted = false;
        self.stats = SimStats::default();
        self.stall_cycles = 0;
    }

    /// Returns `true` once a HALT has executed.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Dumps the current CPU state (PC and registers) as text.
    pub fn dump_state(&self) -> String {
        format!("PC = {}\n{}", self.pc, self.regs.dump())
    }
}
