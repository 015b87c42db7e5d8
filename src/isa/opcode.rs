//! The APEX opcode set.
//!
//! The opcode is a closed enumeration; per-variant field semantics replace
//! per-stage switch blocks, so "which fields are live" is answered once,
//! here, by `OperandShape` and the classification predicates.

/// Written form of an instruction's operand list.
///
/// Shared by the assembly parser (which operands to expect) and the trace
/// printer (how to render them).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandShape {
    /// `rd, rs1, rs2` — three-register ALU ops.
    DstSrcSrc,
    /// `rd, rs1, #imm` — register-immediate ALU ops, loads, JALR.
    DstSrcImm,
    /// `rd, #imm` — MOVC.
    DstImm,
    /// `rs1, rs2, #imm` — stores (value register, base register, offset).
    SrcSrcImm,
    /// `rs1, rs2` — CMP.
    SrcSrc,
    /// `rs1, #imm` — CML, JUMP.
    SrcImm,
    /// `#imm` — conditional branches.
    Imm,
    /// No operands — HALT, NOP.
    None,
}

/// APEX opcode tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Addl,
    Sub,
    Subl,
    Mul,
    Div,
    And,
    Or,
    Xor,
    Movc,
    Load,
    Loadp,
    Store,
    Storep,
    Bz,
    Bnz,
    Bp,
    Bnp,
    Bn,
    Bnn,
    Cmp,
    Cml,
    Jump,
    Jalr,
    Halt,
    #[default]
    Nop,
}

impl Opcode {
    /// Assembly mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Addl => "ADDL",
            Opcode::Sub => "SUB",
            Opcode::Subl => "SUBL",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Movc => "MOVC",
            Opcode::Load => "LOAD",
            Opcode::Loadp => "LOADP",
            Opcode::Store => "STORE",
            Opcode::Storep => "STOREP",
            Opcode::Bz => "BZ",
            Opcode::Bnz => "BNZ",
            Opcode::Bp => "BP",
            Opcode::Bnp => "BNP",
            Opcode::Bn => "BN",
            Opcode::Bnn => "BNN",
            Opcode::Cmp => "CMP",
            Opcode::Cml => "CML",
            Opcode::Jump => "JUMP",
            Opcode::Jalr => "JALR",
            Opcode::Halt => "HALT",
            Opcode::Nop => "NOP",
        }
    }

    /// Looks up an opcode from its mnemonic, case-insensitively.
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        let m = s.to_ascii_uppercase();
        let op = match m.as_str() {
            "ADD" => Opcode::Add,
            "ADDL" => Opcode::Addl,
            "SUB" => Opcode::Sub,
            "SUBL" => Opcode::Subl,
            "MUL" => Opcode::Mul,
            "DIV" => Opcode::Div,
            "AND" => Opcode::And,
            "OR" => Opcode::Or,
            "XOR" => Opcode::Xor,
            "MOVC" => Opcode::Movc,
            "LOAD" => Opcode::Load,
            "LOADP" => Opcode::Loadp,
            "STORE" => Opcode::Store,
            "STOREP" => Opcode::Storep,
            "BZ" => Opcode::Bz,
            "BNZ" => Opcode::Bnz,
            "BP" => Opcode::Bp,
            "BNP" => Opcode::Bnp,
            "BN" => Opcode::Bn,
            "BNN" => Opcode::Bnn,
            "CMP" => Opcode::Cmp,
            "CML" => Opcode::Cml,
            "JUMP" => Opcode::Jump,
            "JALR" => Opcode::Jalr,
            "HALT" => Opcode::Halt,
            "NOP" => Opcode::Nop,
            _ => return None,
        };
        Some(op)
    }

    /// Operand list shape, used by the parser and the trace printer.
    pub fn operand_shape(self) -> OperandShape {
        match self {
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor => OperandShape::DstSrcSrc,
            Opcode::Addl | Opcode::Subl | Opcode::Load | Opcode::Loadp | Opcode::Jalr => {
                OperandShape::DstSrcImm
            }
            Opcode::Movc => OperandShape::DstImm,
            Opcode::Store | Opcode::Storep => OperandShape::SrcSrcImm,
            Opcode::Cmp => OperandShape::SrcSrc,
            Opcode::Cml | Opcode::Jump => OperandShape::SrcImm,
            Opcode::Bz | Opcode::Bnz | Opcode::Bp | Opcode::Bnp | Opcode::Bn | Opcode::Bnn => {
                OperandShape::Imm
            }
            Opcode::Halt | Opcode::Nop => OperandShape::None,
        }
    }

    /// True for opcodes that write `rd` at Writeback.
    ///
    /// LOADP additionally writes back its post-incremented base to `rs1`,
    /// and STOREP to `rs2`; those extra writes are handled explicitly by
    /// Decode and Writeback.
    pub fn writes_rd(self) -> bool {
        matches!(
            self,
            Opcode::Add
                | Opcode::Addl
                | Opcode::Sub
                | Opcode::Subl
                | Opcode::Mul
                | Opcode::Div
                | Opcode::And
                | Opcode::Or
                | Opcode::Xor
                | Opcode::Movc
                | Opcode::Load
                | Opcode::Loadp
                | Opcode::Jalr
        )
    }

    /// True for the six conditional branches.
    pub fn is_conditional_branch(self) -> bool {
        matches!(
            self,
            Opcode::Bz | Opcode::Bnz | Opcode::Bp | Opcode::Bnp | Opcode::Bn | Opcode::Bnn
        )
    }
}
