//! Simulator: run driver around a single CPU.
//!
//! The simulator owns the core, applies the step cap from the configuration,
//! and exposes the architectural state and statistics once a run finishes. A
//! run that faults is marked aborted and never yields a statistics snapshot.

use tracing::info;

use crate::common::{SimError, SimResult};
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::Program;
use crate::stats::SimStats;

/// Top-level simulator: CPU state plus the run driver's bookkeeping.
#[derive(Debug)]
pub struct Simulator {
    cpu: Cpu,
    max_steps: u64,
    aborted: bool,
}

impl Simulator {
    /// Creates a new simulator for `program` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if `config` fails validation.
    pub fn new(program: Program, config: &Config) -> SimResult<Self> {
        Ok(Self {
            cpu: Cpu::new(program, config)?,
            max_steps: config.general.max_steps,
            aborted: false,
        })
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates any run fault from the core and marks the run aborted.
    /// Once aborted, every further tick fails with `SimError::RunAborted`
    /// until [`Simulator::reset`] is called.
    pub fn tick(&mut self) -> SimResult<()> {
        if self.aborted {
            return Err(SimError::RunAborted);
        }
        self.cpu.tick().inspect_err(|_| self.aborted = true)
    }

    /// Runs until a HALT retires, using the configured step cap.
    ///
    /// # Errors
    ///
    /// See [`Simulator::run_with_limit`].
    pub fn run(&mut self) -> SimResult<SimStats> {
        self.run_with_limit(self.max_steps)
    }

    /// Runs until a HALT retires or `max_steps` steps have been taken.
    ///
    /// Returns a snapshot of the statistics for the completed run.
    ///
    /// # Errors
    ///
    /// * `SimError::RunawayProgram` if the cap is reached first.
    /// * `SimError::RunAborted` if an earlier run faulted and was not reset.
    /// * Any run fault raised by the core.
    pub fn run_with_limit(&mut self, max_steps: u64) -> SimResult<SimStats> {
        if self.aborted {
            return Err(SimError::RunAborted);
        }
        let mut steps: u64 = 0;
        while !self.cpu.is_halted() {
            if steps >= max_steps {
                self.aborted = true;
                return Err(SimError::RunawayProgram { max_steps });
            }
            self.tick()?;
            steps += 1;
        }

        let stats = &self.cpu.stats;
        info!(
            cycles = stats.cycles,
            retired = stats.instructions_retired,
            cpi = stats.cpi(),
            "run complete"
        );
        Ok(stats.clone())
    }

    /// Restores the power-on state so a new run starts clean.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.aborted = false;
    }

    /// Copies `data` into main memory starting at `base`, before a run.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfBounds` if the block does not fit.
    pub fn load_memory(&mut self, base: u32, data: &[i32]) -> SimResult<()> {
        self.cpu.load_memory(base, data)
    }

    /// Reads register `idx`; `x0` reads as zero.
    pub fn reg(&self, idx: usize) -> i32 {
        self.cpu.regs.read(idx)
    }

    /// Reads a word of main memory.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfBounds` for an address past main memory.
    pub fn mem_word(&self, addr: u32) -> SimResult<i32> {
        self.cpu.mem_word(addr)
    }

    /// Program counter of the next fetch.
    pub const fn pc(&self) -> i32 {
        self.cpu.pc
    }

    /// Returns `true` once a HALT has retired.
    pub const fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Returns `true` if the last run ended in a fault.
    pub const fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Live statistics for the current run.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Read-only view of the core.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }
}
