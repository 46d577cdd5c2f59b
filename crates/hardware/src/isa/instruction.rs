//! Decoded instruction definitions.
//!
//! Provides the closed opcode set and the fixed-size decoded instruction record
//! that programs are built from. Instructions carry register indices and a
//! signed immediate; there is no binary encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Operation selector for a decoded instruction.
///
/// The numeric order (`ADD = 0` through `HALT = 8`) is the one used by
/// `Opcode::from_u8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `rd = rs1 + rs2`
    Add,
    /// `rd = rs1 - rs2`
    Sub,
    /// `rd = rs1 + imm`
    Addi,
    /// `rd = M[rs1 + imm]`
    Load,
    /// `M[rs1 + imm] = rd`
    Store,
    /// `if rs1 == rs2 { pc = pc + imm }`
    Beq,
    /// `rd = pc + 1; pc = pc + imm`
    Jal,
    /// No operation.
    #[default]
    Nop,
    /// Stop the run once retired.
    Halt,
    /// An opcode the simulator does not recognize. Executes as NOP unless
    /// strict opcode checking is enabled.
    Unknown,
}

impl Opcode {
    /// All recognized opcodes in numeric order.
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Sub,
        Self::Addi,
        Self::Load,
        Self::Store,
        Self::Beq,
        Self::Jal,
        Self::Nop,
        Self::Halt,
    ];

    /// Decodes a numeric opcode. Codes past `HALT` map to `Unknown`.
    pub fn from_u8(code: u8) -> Self {
        Self::ALL.get(code as usize).copied().unwrap_or(Self::Unknown)
    }

    /// Lower-case assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Addi => "addi",
            Self::Load => "load",
            Self::Store => "store",
            Self::Beq => "beq",
            Self::Jal => "jal",
            Self::Nop => "nop",
            Self::Halt => "halt",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when a mnemonic does not name a recognized opcode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMnemonic(pub String);

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mnemonic `{}`", self.0)
    }
}

impl std::error::Error for UnknownMnemonic {}

impl FromStr for Opcode {
    type Err = UnknownMnemonic;

    /// Parses a mnemonic case-insensitively. `ADD-immediate` style names are
    /// not accepted; use `addi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic() == lower)
            .ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}

/// Wire form of an opcode: either a mnemonic or its numeric code.
#[derive(Deserialize)]
#[serde(untagged)]
enum OpcodeRepr {
    Name(String),
    Code(u8),
}

impl<'de> Deserialize<'de> for Opcode {
    /// Unrecognized names and codes decode to `Opcode::Unknown`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OpcodeRepr::deserialize(deserializer)? {
            OpcodeRepr::Name(name) => name.parse().unwrap_or(Self::Unknown),
            OpcodeRepr::Code(code) => Self::from_u8(code),
        })
    }
}

impl Serialize for Opcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.mnemonic().to_ascii_uppercase())
    }
}

/// A decoded instruction.
///
/// Register fields are plain indices; fields an opcode does not use are
/// ignored by Execute. STORE takes its data operand from `rd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Instruction {
    /// Operation.
    pub op: Opcode,
    /// Destination register (data source for STORE).
    #[serde(default)]
    pub rd: u8,
    /// First source register.
    #[serde(default)]
    pub rs1: u8,
    /// Second source register.
    #[serde(default)]
    pub rs2: u8,
    /// Signed immediate.
    #[serde(default)]
    pub imm: i32,
}

impl Instruction {
    /// Builds an instruction from raw fields.
    pub const fn new(op: Opcode, rd: u8, rs1: u8, rs2: u8, imm: i32) -> Self {
        Self {
            op,
            rd,
            rs1,
            rs2,
            imm,
        }
    }

    /// `add rd, rs1, rs2`
    pub const fn add(rd: u8, rs1: u8, rs2: u8) -> Self {
        Self::new(Opcode::Add, rd, rs1, rs2, 0)
    }

    /// `sub rd, rs1, rs2`
    pub const fn sub(rd: u8, rs1: u8, rs2: u8) -> Self {
        Self::new(Opcode::Sub, rd, rs1, rs2, 0)
    }

    /// `addi rd, rs1, imm`
    pub const fn addi(rd: u8, rs1: u8, imm: i32) -> Self {
        Self::new(Opcode::Addi, rd, rs1, 0, imm)
    }

    /// `load rd, rs1, imm`
    pub const fn load(rd: u8, rs1: u8, imm: i32) -> Self {
        Self::new(Opcode::Load, rd, rs1, 0, imm)
    }

    /// `store src, rs1, imm`: writes register `src` to `M[rs1 + imm]`.
    pub const fn store(src: u8, rs1: u8, imm: i32) -> Self {
        Self::new(Opcode::Store, src, rs1, 0, imm)
    }

    /// `beq rs1, rs2, imm`
    pub const fn beq(rs1: u8, rs2: u8, imm: i32) -> Self {
        Self::new(Opcode::Beq, 0, rs1, rs2, imm)
    }

    /// `jal rd, imm`
    pub const fn jal(rd: u8, imm: i32) -> Self {
        Self::new(Opcode::Jal, rd, 0, 0, imm)
    }

    /// `nop`
    pub const fn nop() -> Self {
        Self::new(Opcode::Nop, 0, 0, 0, 0)
    }

    /// `halt`
    pub const fn halt() -> Self {
        Self::new(Opcode::Halt, 0, 0, 0, 0)
    }

    /// Destination register index.
    #[inline]
    pub const fn rd(&self) -> usize {
        self.rd as usize
    }

    /// First source register index.
    #[inline]
    pub const fn rs1(&self) -> usize {
        self.rs1 as usize
    }

    /// Second source register index.
    #[inline]
    pub const fn rs2(&self) -> usize {
        self.rs2 as usize
    }
}
