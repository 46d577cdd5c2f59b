//! Instruction Disassembler.
//!
//! Converts a decoded instruction into the assembly text accepted by
//! `sim::loader::parse_asm`, for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::Instruction;
//! use pipesim_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(&Instruction::addi(1, 0, 7)), "addi x1, x0, 7");
//! assert_eq!(disassemble(&Instruction::store(1, 0, 0)), "store x1, x0, 0");
//! ```

use std::fmt;

use crate::isa::instruction::{Instruction, Opcode};

/// Disassembles an instruction into a human-readable string.
pub fn disassemble(inst: &Instruction) -> String {
    inst.to_string()
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.op.mnemonic();
        match self.op {
            Opcode::Add | Opcode::Sub => {
                write!(f, "{m} x{}, x{}, x{}", self.rd, self.rs1, self.rs2)
            }
            Opcode::Addi | Opcode::Load | Opcode::Store => {
                write!(f, "{m} x{}, x{}, {}", self.rd, self.rs1, self.imm)
            }
            Opcode::Beq => write!(f, "{m} x{}, x{}, {}", self.rs1, self.rs2, self.imm),
            Opcode::Jal => write!(f, "{m} x{}, {}", self.rd, self.imm),
            Opcode::Nop | Opcode::Halt | Opcode::Unknown => f.write_str(m),
        }
    }
}
