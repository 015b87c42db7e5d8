//! APEX CPU core.
//!
//! This module contains the CPU aggregate, the architectural state
//! (registers, condition codes), the pipeline latches and scoreboard, the
//! code and data memories, and the five stage implementations.

/// Architectural state: register file and condition codes.
pub mod arch;

/// CPU aggregate and tick driver.
pub mod cpu;

/// Code and data memories.
pub mod memory;

/// Pipeline latches and the hazard scoreboard.
pub mod pipeline;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

pub use cpu::{Cpu, StopReason, TickOutcome};
