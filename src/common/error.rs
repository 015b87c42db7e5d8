//! Error types for the APEX simulator.
//!
//! Failures are split into two families: `LoadError` covers everything that
//! can be rejected before the first clock tick (the input program is a
//! precondition of simulation), while `SimError` covers the faults a running
//! program can still trigger. Hazard stalls and branch flushes are normal
//! pipeline events, not errors.

use thiserror::Error;

/// Fail-fast errors raised while parsing a program into code memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("cannot read program file '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line began with a token that is not an APEX mnemonic.
    #[error("line {line}: unknown mnemonic '{mnemonic}'")]
    UnknownMnemonic {
        /// 1-based source line.
        line: usize,
        /// The offending token.
        mnemonic: String,
    },

    /// An operand token was neither a register `R<n>` nor a literal `#<k>`
    /// of the kind the opcode expects.
    #[error("line {line}: malformed operand '{operand}'")]
    MalformedOperand {
        /// 1-based source line.
        line: usize,
        /// The offending token.
        operand: String,
    },

    /// The operand count did not match the opcode's shape.
    #[error("line {line}: expected {expected} operands, found {found}")]
    OperandCount {
        /// 1-based source line.
        line: usize,
        /// Operands required by the opcode.
        expected: usize,
        /// Operands present on the line.
        found: usize,
    },

    /// A register index was outside R0..R15.
    #[error("line {line}: register R{index} out of range (R0..R15)")]
    RegisterOutOfRange {
        /// 1-based source line.
        line: usize,
        /// Parsed register index.
        index: i64,
    },

    /// A PC-relative branch resolved outside code memory or to an address
    /// that is not a multiple of 4.
    #[error("line {line}: branch target {target} outside code memory")]
    BranchTargetOutOfRange {
        /// 1-based source line.
        line: usize,
        /// Resolved absolute target address.
        target: i32,
    },

    /// The file contained no instructions.
    #[error("program contains no instructions")]
    EmptyProgram,
}

/// Fatal faults raised while the pipeline is running.
#[derive(Debug, Error)]
pub enum SimError {
    /// A load or store addressed a word outside data memory.
    #[error("data memory address {address} out of range at pc({pc})")]
    DataAddressOutOfRange {
        /// PC of the faulting instruction.
        pc: i32,
        /// Effective address that missed.
        address: i32,
    },

    /// A DIV executed with a zero divisor.
    #[error("division by zero at pc({pc})")]
    DivisionByZero {
        /// PC of the faulting instruction.
        pc: i32,
    },

    /// A register-indirect control transfer targeted an address below the
    /// code base or one that is not a multiple of 4.
    #[error("control transfer to invalid address {target} at pc({pc})")]
    InvalidJumpTarget {
        /// PC of the jump instruction.
        pc: i32,
        /// Computed target address.
        target: i32,
    },
}
