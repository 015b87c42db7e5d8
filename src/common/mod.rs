//! Common constants and types used throughout the APEX simulator.
//!
//! This module provides the architectural constants and the error types
//! shared across the loader, the pipeline, and the CLI.

/// Architectural constants.
pub mod constants;

/// Error types for program loading and simulation faults.
pub mod error;

pub use constants::{DEFAULT_DATA_MEMORY_WORDS, PC_BASE, PC_STEP, REG_COUNT};
pub use error::{LoadError, SimError};
