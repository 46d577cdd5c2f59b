//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It
//! performs the following:
//! 1. **Hazard Detection:** Holds the waiting instruction for one cycle when it
//!    reads the destination of a LOAD that executed this cycle.
//! 2. **Control Generation:** Derives `ControlSignals` from the opcode.
//! 3. **Latch Transfer:** Moves the instruction from IF/ID to ID/EX.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::hazards::need_stall_load_use;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::ControlSignals;

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `executed` - The ID/EX entry that Execute consumed this cycle, if any
///
/// # Behavior
///
/// - Leaves IF/ID untouched and counts a data stall on a load-use hazard
/// - Does nothing when IF/ID holds a bubble
/// - Otherwise issues into ID/EX and empties IF/ID
pub fn decode_stage(cpu: &mut Cpu, executed: Option<&IdExEntry>) {
    let Some(waiting) = cpu.if_id.entry else {
        return;
    };

    if need_stall_load_use(executed, &cpu.if_id) {
        cpu.stats.stalls_data += 1;
        debug!(pc = waiting.pc, inst = %waiting.inst, "load-use stall");
        return;
    }

    if cpu.id_ex.is_valid() {
        return;
    }

    cpu.id_ex.entry = Some(IdExEntry {
        pc: waiting.pc,
        inst: waiting.inst,
        ctrl: ControlSignals::for_opcode(waiting.inst.op),
    });
    cpu.if_id.flush();
}
