//! Program Loader.
//!
//! This module turns program files into a `Program`. It performs:
//! 1. **Format selection:** `.json` files are decoded as instruction records, anything else as assembly.
//! 2. **Assembly parsing:** One instruction per line, `#` or `;` comments, registers as `xN`.
//! 3. **Validation:** Register ranges are checked once, when the program is built.

use std::fs;
use std::path::Path;

use crate::common::{NUM_REGS, SimError, SimResult};
use crate::isa::instruction::UnknownMnemonic;
use crate::isa::{Instruction, Opcode, Program};

/// Loads a program from disk.
///
/// # Arguments
///
/// * `path` - Path to a `.json` instruction array or an assembly text file.
///
/// # Errors
///
/// `SimError::Io` if the file cannot be read, `SimError::Json` or
/// `SimError::Parse` if it cannot be decoded.
pub fn load_program(path: impl AsRef<Path>) -> SimResult<Program> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Program::from_json(&text)
    } else {
        parse_asm(&text)
    }
}

/// Parses assembly text into a program.
///
/// Operands are separated by commas and/or whitespace. Immediates are decimal
/// or `0x`-prefixed hexadecimal, optionally negative.
///
/// ```
/// use pipesim_core::sim::loader::parse_asm;
///
/// let prog = parse_asm("addi x1, x0, 7   # seven\nstore x1, x0, 0\nhalt\n").unwrap();
/// assert_eq!(prog.len(), 3);
/// ```
///
/// # Errors
///
/// `SimError::Parse` naming the 1-based line of the first malformed instruction.
pub fn parse_asm(text: &str) -> SimResult<Program> {
    let mut insts = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let code = raw.split(['#', ';']).next().unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }
        insts.push(parse_line(code).map_err(|message| SimError::Parse { line, message })?);
    }
    Program::new(insts)
}

fn parse_line(code: &str) -> Result<Instruction, String> {
    let mut tokens = code
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let mnemonic = tokens.next().unwrap_or_default();
    let op: Opcode = mnemonic.parse().map_err(|e: UnknownMnemonic| e.to_string())?;
    let operands: Vec<&str> = tokens.collect();

    let expected = match op {
        Opcode::Add | Opcode::Sub | Opcode::Addi | Opcode::Load | Opcode::Store | Opcode::Beq => 3,
        Opcode::Jal => 2,
        Opcode::Nop | Opcode::Halt | Opcode::Unknown => 0,
    };
    if operands.len() != expected {
        return Err(format!(
            "`{op}` takes {expected} operands, found {}",
            operands.len()
        ));
    }

    let inst = match op {
        Opcode::Add | Opcode::Sub => Instruction::new(
            op,
            parse_reg(operands[0])?,
            parse_reg(operands[1])?,
            parse_reg(operands[2])?,
            0,
        ),
        Opcode::Addi | Opcode::Load | Opcode::Store => Instruction::new(
            op,
            parse_reg(operands[0])?,
            parse_reg(operands[1])?,
            0,
            parse_imm(operands[2])?,
        ),
        Opcode::Beq => Instruction::beq(
            parse_reg(operands[0])?,
            parse_reg(operands[1])?,
            parse_imm(operands[2])?,
        ),
        Opcode::Jal => Instruction::jal(parse_reg(operands[0])?, parse_imm(operands[1])?),
        Opcode::Nop | Opcode::Unknown => Instruction::nop(),
        Opcode::Halt => Instruction::halt(),
    };
    Ok(inst)
}

fn parse_reg(token: &str) -> Result<u8, String> {
    let digits = token
        .strip_prefix(['x', 'X'])
        .ok_or_else(|| format!("expected register, found `{token}`"))?;
    match digits.parse::<u8>() {
        Ok(reg) if usize::from(reg) < NUM_REGS => Ok(reg),
        _ => Err(format!("invalid register `{token}`")),
    }
}

fn parse_imm(token: &str) -> Result<i32, String> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => body.parse::<i64>(),
    }
    .map_err(|_| format!("invalid immediate `{token}`"))?;

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| format!("immediate `{token}` does not fit in 32 bits"))
}
