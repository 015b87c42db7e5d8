//! Architectural constants of the APEX machine.

/// Address of the first instruction in code memory.
pub const PC_BASE: i32 = 4000;

/// Byte distance between consecutive instructions.
pub const PC_STEP: i32 = 4;

/// Number of architectural registers (R0..R15).
pub const REG_COUNT: usize = 16;

/// Default number of data-memory words when no configuration is given.
pub const DEFAULT_DATA_MEMORY_WORDS: usize = 4096;
