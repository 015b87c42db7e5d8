//! Pipeline latch structure for inter-stage communication.
//!
//! One latch sits at each stage boundary (F/D, D/X, X/M, M/W) and carries a
//! single in-flight instruction's state. The same structure is used at every
//! boundary: a stage fills in the fields it produces and the rest ride along
//! unchanged, exactly as a hardware latch would.
//!
//! The driver evaluates stages back-to-front within a tick, so each stage
//! reads its input latch before the upstream stage overwrites it. That
//! discipline replaces double-buffering.

use crate::isa::Instruction;

/// A pipeline latch holding one in-flight instruction.
///
/// `has_insn == false` denotes a bubble: downstream stages treat the latch
/// as empty. `stalled` is only meaningful on the Fetch and Decode latches,
/// where it is owned by Decode's issue logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageLatch {
    /// Address of the instruction this latch carries.
    pub pc: i32,
    /// The decoded instruction.
    pub insn: Instruction,
    /// Snapshot of the first source operand, taken at Decode issue.
    ///
    /// LOADP overwrites this in Execute with the post-incremented base so
    /// Writeback can store it back to `rs1`.
    pub rs1_value: i32,
    /// Snapshot of the second source operand, taken at Decode issue.
    ///
    /// STOREP overwrites this in Execute with the post-incremented base so
    /// Writeback can store it back to `rs2`.
    pub rs2_value: i32,
    /// ALU result, MOVC literal, JALR link value, or loaded word.
    pub result_buffer: i32,
    /// Effective address computed by Execute for loads and stores.
    pub memory_address: i32,
    /// Valid bit; false means this latch holds a bubble.
    pub has_insn: bool,
    /// Stall bit; set by Decode when the instruction cannot issue.
    pub stalled: bool,
}

impl StageLatch {
    /// An empty latch (bubble).
    pub fn bubble() -> Self {
        Self::default()
    }
}
