//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads
//! the instruction at the current Program Counter into the IF/ID latch and
//! advances the PC sequentially. Control transfers are applied by the flush at
//! the start of the next cycle, never here.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::Instruction;

/// Executes the instruction fetch stage of the pipeline.
///
/// Does nothing while IF/ID is still occupied (the decode stage stalled).
/// A PC outside the program yields a synthesized HALT, so running off the end
/// of the program stops the run cleanly.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.if_id.is_valid() {
        return;
    }

    let pc = cpu.pc;
    let inst = match cpu.program.get(pc) {
        Some(inst) => *inst,
        None => {
            trace!(pc, "fetch outside program, synthesizing halt");
            Instruction::halt()
        }
    };

    cpu.if_id.entry = Some(IfIdEntry { pc, inst });
    cpu.pc = pc.wrapping_add(1);
}
