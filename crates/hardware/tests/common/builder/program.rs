use pipesim_core::isa::{Instruction, Program};

/// Fluent builder for test programs.
///
/// ```ignore
/// let prog = ProgramBuilder::new().addi(1, 0, 7).store(1, 0, 0).halt().build();
/// ```
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    insts: Vec<Instruction>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, inst: Instruction) -> Self {
        self.insts.push(inst);
        self
    }

    pub fn add(self, rd: u8, rs1: u8, rs2: u8) -> Self {
        self.push(Instruction::add(rd, rs1, rs2))
    }

    pub fn sub(self, rd: u8, rs1: u8, rs2: u8) -> Self {
        self.push(Instruction::sub(rd, rs1, rs2))
    }

    pub fn addi(self, rd: u8, rs1: u8, imm: i32) -> Self {
        self.push(Instruction::addi(rd, rs1, imm))
    }

    pub fn load(self, rd: u8, rs1: u8, imm: i32) -> Self {
        self.push(Instruction::load(rd, rs1, imm))
    }

    pub fn store(self, src: u8, rs1: u8, imm: i32) -> Self {
        self.push(Instruction::store(src, rs1, imm))
    }

    pub fn beq(self, rs1: u8, rs2: u8, imm: i32) -> Self {
        self.push(Instruction::beq(rs1, rs2, imm))
    }

    pub fn jal(self, rd: u8, imm: i32) -> Self {
        self.push(Instruction::jal(rd, imm))
    }

    pub fn nop(self) -> Self {
        self.push(Instruction::nop())
    }

    pub fn halt(self) -> Self {
        self.push(Instruction::halt())
    }

    pub fn insts(&self) -> &[Instruction] {
        &self.insts
    }

    pub fn build(self) -> Program {
        Program::new(self.insts).expect("test program uses valid registers")
    }
}
