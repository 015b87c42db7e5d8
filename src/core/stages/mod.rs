//! The five pipeline stages.
//!
//! Each stage is a free function taking the CPU aggregate by mutable
//! borrow. The driver calls them in reverse pipeline order within a tick.

/// Decode/RF stage: operand read, scoreboard check, issue or stall.
pub mod decode;

/// Execute stage: ALU, address calculation, branch resolution, flags.
pub mod execute;

/// Fetch stage: PC-indexed instruction read into the F latch.
pub mod fetch;

/// Memory stage: data-memory loads and stores.
pub mod memory_access;

/// Writeback stage: register-file writes, scoreboard release, halt.
pub mod write_back;
