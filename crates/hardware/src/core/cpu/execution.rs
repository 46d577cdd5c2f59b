//! Main Execution Loop.
//!
//! This module implements the core execution cycle of the CPU. It performs the following:
//! 1. **Redirect:** Applies a taken branch recorded last cycle and flushes IF/ID.
//! 2. **Pipeline Coordination:** Runs Execute, Decode and Fetch in that order.
//! 3. **Timing Management:** Counts cycles and freezes the pipeline on modeled memory latency.
//! 4. **Observability:** Emits a pipeline diagram at `trace` level when enabled.

use tracing::{debug, trace};

use super::Cpu;
use crate::common::SimResult;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage};

impl Cpu {
    /// Advances the core by one clock cycle.
    ///
    /// A halted core does not advance.
    ///
    /// # Errors
    ///
    /// Propagates the run faults raised by Execute. The cycle that faulted is
    /// not counted.
    pub fn tick(&mut self) -> SimResult<()> {
        if self.halted {
            return Ok(());
        }

        if self.stall_cycles > 0 {
            self.stall_cycles -= 1;
            self.stats.stalls_mem += 1;
            self.post_tick();
            return Ok(());
        }

        if let Some(target) = self.redirect.take() {
            debug!(from = self.pc, target, "flushing fetch for taken branch");
            self.pc = target;
            self.if_id.flush();
            self.stats.flushes += 1;
        }

        let executed = self.id_ex.entry.take();
        if let Some(entry) = &executed {
            execute_stage(self, entry)?;
        }

        decode_stage(self, executed.as_ref());
        fetch_stage(self);

        self.post_tick();
        Ok(())
    }

    /// End of cycle: force x0 back to zero, count the cycle, trace.
    fn post_tick(&mut self) {
        self.regs.zero_x0();
        self.stats.cycles += 1;

        if self.trace {
            self.print_pipeline_diagram();
        }
    }

    /// Emits a diagram of the current pipeline state at `trace` level.
    pub fn print_pipeline_diagram(&self) {
        trace!(
            cycle = self.stats.cycles,
            pc = self.pc,
            stalled = self.stall_cycles > 0,
            "IF/ID {} | ID/EX {}",
            self.if_id,
            self.id_ex
        );
    }
}
