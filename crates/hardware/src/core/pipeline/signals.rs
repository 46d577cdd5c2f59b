//! Pipeline control signals and operation types.
//!
//! This module defines the signals Decode derives from an opcode. It performs:
//! 1. **Operation Classification:** ALU operation and operand source.
//! 2. **Register Usage:** Which register fields are read and whether `rd` is written.
//! 3. **Memory and Control:** Load/store, branch/jump, and halt flags.

use crate::isa::Opcode;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (also used for effective addresses).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,
}

/// Control signals generated by the Decode stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Result is written to `rd`.
    pub reg_write: bool,
    /// Reads main memory through the cache (LOAD).
    pub mem_read: bool,
    /// Writes main memory through the cache (STORE).
    pub mem_write: bool,
    /// Conditional branch (BEQ).
    pub branch: bool,
    /// Unconditional jump (JAL).
    pub jump: bool,
    /// Stops the run when retired.
    pub halt: bool,
    /// Opcode was not recognized.
    pub illegal: bool,
    /// ALU operation.
    pub alu_op: AluOp,
    /// Second ALU operand is the immediate rather than `rs2`.
    pub alu_src_imm: bool,
    /// `rs1` is read.
    pub reads_rs1: bool,
    /// `rs2` is read.
    pub reads_rs2: bool,
    /// `rd` is read as a data operand (STORE).
    pub reads_rd: bool,
}

impl ControlSignals {
    /// Derives the control signals for an opcode.
    ///
    /// BEQ carries no destination, so it never sets `reg_write`.
    pub fn for_opcode(op: Opcode) -> Self {
        let base = Self::default();
        match op {
            Opcode::Add => Self {
                reg_write: true,
                reads_rs1: true,
                reads_rs2: true,
                ..base
            },
            Opcode::Sub => Self {
                reg_write: true,
                alu_op: AluOp::Sub,
                reads_rs1: true,
                reads_rs2: true,
                ..base
            },
            Opcode::Addi => Self {
                reg_write: true,
                alu_src_imm: true,
                reads_rs1: true,
                ..base
            },
            Opcode::Load => Self {
                reg_write: true,
                mem_read: true,
                alu_src_imm: true,
                reads_rs1: true,
                ..base
            },
            Opcode::Store => Self {
                mem_write: true,
                alu_src_imm: true,
                reads_rs1: true,
                reads_rd: true,
                ..base
            },
            Opcode::Beq => Self {
                branch: true,
                alu_op: AluOp::Sub,
                reads_rs1: true,
                reads_rs2: true,
                ..base
            },
            Opcode::Jal => Self {
                reg_write: true,
                jump: true,
                ..base
            },
            Opcode::Halt => Self { halt: true, ..base },
            Opcode::Nop => base,
            Opcode::Unknown => Self {
                illegal: true,
                ..base
            },
        }
    }

    /// Returns `true` for instructions that transfer control.
    pub const fn is_control(&self) -> bool {
        self.branch || self.jump
    }
}
