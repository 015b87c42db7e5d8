//! Decoded instruction form stored in code memory.

use std::fmt;

use super::opcode::{Opcode, OperandShape};

/// A decoded APEX instruction.
///
/// Register and immediate fields are only meaningful for the operand shape
/// of the opcode; unused fields are left at whatever the loader produced
/// (zero) and are never read downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Opcode tag.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Signed immediate.
    pub imm: i32,
}

impl Instruction {
    /// A HALT instruction, used by Fetch to drain the pipeline when the PC
    /// walks past the end of code memory.
    pub fn halt() -> Self {
        Self {
            opcode: Opcode::Halt,
            ..Self::default()
        }
    }
}

impl fmt::Display for Instruction {
    /// Renders the instruction in assembly form, e.g. `ADD,R3,R1,R2` or
    /// `MOVC,R1,#5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.opcode.mnemonic();
        match self.opcode.operand_shape() {
            OperandShape::DstSrcSrc => {
                write!(f, "{},R{},R{},R{}", m, self.rd, self.rs1, self.rs2)
            }
            OperandShape::DstSrcImm => {
                write!(f, "{},R{},R{},#{}", m, self.rd, self.rs1, self.imm)
            }
            OperandShape::DstImm => write!(f, "{},R{},#{}", m, self.rd, self.imm),
            OperandShape::SrcSrcImm => {
                write!(f, "{},R{},R{},#{}", m, self.rs1, self.rs2, self.imm)
            }
            OperandShape::SrcSrc => write!(f, "{},R{},R{}", m, self.rs1, self.rs2),
            OperandShape::SrcImm => write!(f, "{},R{},#{}", m, self.rs1, self.imm),
            OperandShape::Imm => write!(f, "{},#{}", m, self.imm),
            OperandShape::None => write!(f, "{}", m),
        }
    }
}
