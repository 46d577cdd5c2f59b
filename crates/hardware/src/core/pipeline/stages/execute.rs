//! Instruction Execute (EX) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It performs:
//! 1. **Arithmetic:** ADD, SUB and ADDI through the ALU, wrapping on overflow.
//! 2. **Memory Access:** LOAD and STORE through the data cache at `rs1 + imm`.
//! 3. **Control Resolution:** BEQ and JAL record a redirect that the next cycle applies.
//! 4. **Termination:** HALT marks the core halted.
//!
//! Dispatch follows the control signals Decode attached to the entry. Register
//! writes happen here, so the architectural state is complete
//! as soon as an instruction leaves this stage.

use tracing::{trace, warn};

use crate::common::{SimError, SimResult};
use crate::core::Cpu;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::AluOp;
use crate::core::units::alu::Alu;

/// Executes one instruction taken out of the ID/EX latch.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `entry` - The instruction and control signals leaving ID/EX
///
/// # Errors
///
/// * `SimError::MemoryOutOfBounds` when a LOAD or STORE addresses past main memory.
/// * `SimError::IllegalOpcode` for an unrecognized opcode when strict checking is on.
///
/// The instruction is not counted as retired when an error is returned.
pub fn execute_stage(cpu: &mut Cpu, entry: &IdExEntry) -> SimResult<()> {
    let IdExEntry { pc, inst, ctrl } = *entry;

    if ctrl.illegal {
        if cpu.strict_opcodes {
            return Err(SimError::IllegalOpcode {
                pc,
                name: inst.op.mnemonic().to_owned(),
            });
        }
        warn!(pc, "unrecognized opcode executed as nop");
    }

    let rs1_val = cpu.regs.read(inst.rs1());
    let rs2_val = cpu.regs.read(inst.rs2());

    if ctrl.mem_read {
        let addr = effective_address(rs1_val, inst.imm);
        let value = cpu.load_data(addr)?;
        cpu.regs.write(inst.rd(), value);
        cpu.stats.inst_load += 1;
    } else if ctrl.mem_write {
        let addr = effective_address(rs1_val, inst.imm);
        let value = cpu.regs.read(inst.rd());
        cpu.store_data(addr, value)?;
        cpu.stats.inst_store += 1;
    } else if ctrl.is_control() {
        // BEQ compares through the ALU: equal operands subtract to zero.
        let taken = ctrl.jump || Alu::execute(ctrl.alu_op, rs1_val, rs2_val) == 0;
        if ctrl.reg_write {
            cpu.regs.write(inst.rd(), pc.wrapping_add(1));
        }
        if taken {
            redirect(cpu, pc, pc.wrapping_add(inst.imm));
        }
        cpu.stats.inst_branch += 1;
    } else if ctrl.halt {
        cpu.halted = true;
        cpu.stats.inst_system += 1;
    } else if ctrl.reg_write {
        let b = if ctrl.alu_src_imm { inst.imm } else { rs2_val };
        let result = Alu::execute(ctrl.alu_op, rs1_val, b);
        cpu.regs.write(inst.rd(), result);
        cpu.stats.inst_alu += 1;
    } else {
        cpu.stats.inst_system += 1;
    }

    cpu.stats.instructions_retired += 1;
    Ok(())
}

/// Word address `base + imm`, reinterpreted as unsigned.
///
/// A negative sum becomes a huge address and is rejected by the bounds check.
fn effective_address(base: i32, imm: i32) -> u32 {
    Alu::execute(AluOp::Add, base, imm) as u32
}

/// Records a taken control transfer for the flush at the start of the next cycle.
fn redirect(cpu: &mut Cpu, pc: i32, target: i32) {
    trace!(pc, target, "control transfer taken");
    cpu.redirect = Some(target);
    cpu.stats.branches_taken += 1;
}
