//! Data Hazard Detection.
//!
//! This module implements the dependency checks the Decode stage uses before
//! issuing an instruction. It provides:
//! 1. **Dependency Predicate:** Whether an older instruction produces a given register.
//! 2. **Load-Use Detection:** Whether the waiting instruction reads the destination of
//!    the LOAD that occupied Execute this cycle, which costs one stall cycle.

use crate::common::REG_ZERO;
use crate::core::pipeline::latches::{IdExEntry, IfId};
use crate::core::pipeline::signals::ControlSignals;

/// Returns `true` if `older` writes `reg`.
///
/// `x0` never carries a dependency, and neither does a bubble or an instruction
/// with no destination (HALT, NOP, STORE, BEQ).
///
/// # Examples
///
/// ```
/// use pipesim_core::core::pipeline::hazards::has_dependency;
/// use pipesim_core::core::pipeline::latches::IdExEntry;
/// use pipesim_core::core::pipeline::signals::ControlSignals;
/// use pipesim_core::isa::Instruction;
///
/// let inst = Instruction::load(5, 0, 0);
/// let older = IdExEntry { pc: 0, inst, ctrl: ControlSignals::for_opcode(inst.op) };
/// assert!(has_dependency(5, Some(&older)));
/// assert!(!has_dependency(6, Some(&older)));
/// assert!(!has_dependency(5, None));
/// ```
pub fn has_dependency(reg: usize, older: Option<&IdExEntry>) -> bool {
    if reg == REG_ZERO {
        return false;
    }
    match older {
        Some(entry) if entry.ctrl.reg_write => entry.inst.rd() == reg,
        _ => false,
    }
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction waiting in IF/ID reads the
/// destination of a LOAD that occupied the Execute stage this cycle.
///
/// # Arguments
///
/// * `executing` - The ID/EX entry that entered Execute this cycle, if any.
/// * `if_id` - The IF/ID latch holding the instruction waiting to issue.
///
/// # Returns
///
/// `true` if issue must be held for one cycle.
pub fn need_stall_load_use(executing: Option<&IdExEntry>, if_id: &IfId) -> bool {
    let Some(load) = executing.filter(|e| e.ctrl.mem_read) else {
        return false;
    };
    let Some(waiting) = if_id.entry.as_ref() else {
        return false;
    };

    let ctrl = ControlSignals::for_opcode(waiting.inst.op);
    let inst = &waiting.inst;
    (ctrl.reads_rs1 && has_dependency(inst.rs1(), Some(load)))
        || (ctrl.reads_rs2 && has_dependency(inst.rs2(), Some(load)))
        || (ctrl.reads_rd && has_dependency(inst.rd(), Some(load)))
}
