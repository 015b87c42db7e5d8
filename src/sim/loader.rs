//! Program Loader.
//!
//! Parses an APEX text program, one instruction per line, into code memory.
//! The first instruction is placed at PC 4000, the next at 4004, and so on.
//! Blank lines and lines starting with `;` are ignored; mnemonics are
//! case-insensitive; operands are registers `R<n>` or literals `#<k>`
//! separated by commas or whitespace.
//!
//! All validation happens here so simulation can treat program correctness
//! as a precondition: unknown mnemonics, malformed operands, out-of-range
//! registers, and PC-relative branch targets outside code memory fail fast.

use std::fs;

use crate::common::{LoadError, PC_BASE, PC_STEP, REG_COUNT};
use crate::isa::{Instruction, Opcode, OperandShape};

/// Loads and parses a program file.
pub fn load_program(path: &str) -> Result<Vec<Instruction>, LoadError> {
    let src = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_program(&src)
}

/// Parses program text into code memory.
pub fn parse_program(src: &str) -> Result<Vec<Instruction>, LoadError> {
    let mut insns = Vec::new();
    let mut branch_sites = Vec::new();

    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let insn = parse_line(line, line_no)?;
        if insn.opcode.is_conditional_branch() {
            branch_sites.push((line_no, insns.len()));
        }
        insns.push(insn);
    }

    if insns.is_empty() {
        return Err(LoadError::EmptyProgram);
    }

    // Branch targets are PC-relative and fully known now; reject anything
    // that cannot land on an instruction.
    let end = PC_BASE + PC_STEP * insns.len() as i32;
    for (line, index) in branch_sites {
        let insn = &insns[index];
        let target = (PC_BASE + PC_STEP * index as i32).wrapping_add(insn.imm);
        if target % PC_STEP != 0 || target < PC_BASE || target >= end {
            return Err(LoadError::BranchTargetOutOfRange { line, target });
        }
    }

    Ok(insns)
}

fn parse_line(line: &str, line_no: usize) -> Result<Instruction, LoadError> {
    let mut parts = line.splitn(2, |c: char| c == ' ' || c == '\t' || c == ',');
    let mnemonic = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default();

    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| LoadError::UnknownMnemonic {
        line: line_no,
        mnemonic: mnemonic.to_string(),
    })?;

    let tokens: Vec<&str> = rest
        .split(|c: char| c == ',' || c == ' ' || c == '\t')
        .filter(|t| !t.is_empty())
        .collect();

    let shape = opcode.operand_shape();
    let expected = match shape {
        OperandShape::DstSrcSrc | OperandShape::DstSrcImm | OperandShape::SrcSrcImm => 3,
        OperandShape::DstImm | OperandShape::SrcSrc | OperandShape::SrcImm => 2,
        OperandShape::Imm => 1,
        OperandShape::None => 0,
    };
    if tokens.len() != expected {
        return Err(LoadError::OperandCount {
            line: line_no,
            expected,
            found: tokens.len(),
        });
    }

    let reg = |tok: &str| parse_register(tok, line_no);
    let imm = |tok: &str| parse_immediate(tok, line_no);

    let mut insn = Instruction {
        opcode,
        ..Instruction::default()
    };
    match shape {
        OperandShape::DstSrcSrc => {
            insn.rd = reg(tokens[0])?;
            insn.rs1 = reg(tokens[1])?;
            insn.rs2 = reg(tokens[2])?;
        }
        OperandShape::DstSrcImm => {
            insn.rd = reg(tokens[0])?;
            insn.rs1 = reg(tokens[1])?;
            insn.imm = imm(tokens[2])?;
        }
        OperandShape::DstImm => {
            insn.rd = reg(tokens[0])?;
            insn.imm = imm(tokens[1])?;
        }
        OperandShape::SrcSrcImm => {
            insn.rs1 = reg(tokens[0])?;
            insn.rs2 = reg(tokens[1])?;
            insn.imm = imm(tokens[2])?;
        }
        OperandShape::SrcSrc => {
            insn.rs1 = reg(tokens[0])?;
            insn.rs2 = reg(tokens[1])?;
        }
        OperandShape::SrcImm => {
            insn.rs1 = reg(tokens[0])?;
            insn.imm = imm(tokens[1])?;
        }
        OperandShape::Imm => {
            insn.imm = imm(tokens[0])?;
        }
        OperandShape::None => {}
    }

    Ok(insn)
}

fn parse_register(tok: &str, line: usize) -> Result<usize, LoadError> {
    let body = tok
        .strip_prefix('R')
        .or_else(|| tok.strip_prefix('r'))
        .ok_or_else(|| LoadError::MalformedOperand {
            line,
            operand: tok.to_string(),
        })?;
    let index: i64 = body.parse().map_err(|_| LoadError::MalformedOperand {
        line,
        operand: tok.to_string(),
    })?;
    if !(0..REG_COUNT as i64).contains(&index) {
        return Err(LoadError::RegisterOutOfRange { line, index });
    }
    Ok(index as usize)
}

fn parse_immediate(tok: &str, line: usize) -> Result<i32, LoadError> {
    let body = tok.strip_prefix('#').ok_or_else(|| LoadError::MalformedOperand {
        line,
        operand: tok.to_string(),
    })?;
    body.parse().map_err(|_| LoadError::MalformedOperand {
        line,
        operand: tok.to_string(),
    })
}
