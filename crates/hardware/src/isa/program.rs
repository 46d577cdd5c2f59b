//! Static program container.
//!
//! A `Program` is the ordered, immutable instruction sequence a run executes,
//! indexed by program counter. Register fields are range-checked once here so
//! the pipeline can index the register file without further checks.

use std::ops::Index;

use crate::common::{NUM_REGS, SimError, SimResult};
use crate::isa::instruction::Instruction;

/// Ordered instruction sequence indexed by program counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    insts: Vec<Instruction>,
}

impl Program {
    /// Builds a program, rejecting instructions that name a register past `x31`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Parse` with the 1-based position of the first bad instruction.
    pub fn new(insts: Vec<Instruction>) -> SimResult<Self> {
        for (i, inst) in insts.iter().enumerate() {
            for reg in [inst.rd(), inst.rs1(), inst.rs2()] {
                if reg >= NUM_REGS {
                    return Err(SimError::Parse {
                        line: i + 1,
                        message: format!("register x{reg} out of range in `{inst}`"),
                    });
                }
            }
        }
        Ok(Self { insts })
    }

    /// Decodes a JSON array of instruction records.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let insts: Vec<Instruction> = serde_json::from_str(json)?;
        Self::new(insts)
    }

    /// Returns the instruction at `pc`, or `None` when `pc` is outside the program.
    pub fn get(&self, pc: i32) -> Option<&Instruction> {
        usize::try_from(pc).ok().and_then(|i| self.insts.get(i))
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.insts.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }

    /// Iterates over the instructions in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.insts.iter()
    }

    /// Borrows the instructions as a slice.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.insts
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, idx: usize) -> &Instruction {
        &self.insts[idx]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.insts.iter()
    }
}
