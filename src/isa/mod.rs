//! APEX Instruction Set Architecture definitions.
//!
//! This module defines the closed opcode set, the decoded instruction form
//! stored in code memory, and the operand shapes shared by the loader and
//! the per-cycle trace printer.

/// Decoded instruction representation.
pub mod instruction;

/// Opcode enumeration and per-opcode classification.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::{Opcode, OperandShape};
