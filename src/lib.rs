//! APEX Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate simulator for the APEX five-stage
//! in-order scalar pipeline. It executes a small fixed-width RISC ISA loaded
//! from text assembly, one clock tick at a time.
//!
//! # Architecture
//!
//! * **Core**: 5-stage in-order pipeline (Fetch, Decode/RF, Execute, Memory,
//!   Writeback), evaluated back-to-front within each tick.
//! * **Hazards**: a per-register scoreboard stalls dependent instructions in
//!   Decode until the in-flight writer drains through Writeback (no
//!   forwarding, no renaming).
//! * **Control flow**: taken branches and register-indirect jumps resolve in
//!   Execute, flushing the younger in-flight instruction and redirecting the
//!   program counter with a fixed two-cycle penalty.
//!
//! # Modules
//!
//! * `common`: Shared constants and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Program loader.
//! * `stats`: Simulation statistics collection.

/// Shared constants and error types.
///
/// Provides the architectural constants (PC origin, register count) and the
/// load-time and simulation-time error enums used throughout the simulator.
pub mod common;

/// Configuration system for tracing and memory settings.
///
/// Loads and parses TOML configuration files to customize simulator behavior.
pub mod config;

/// CPU core implementation including pipeline stages and architectural state.
///
/// Implements the 5-stage in-order pipeline, the register file, condition
/// codes, scoreboard, and code/data memories.
pub mod core;

/// Instruction Set Architecture definitions.
///
/// Implements the APEX opcode set, the decoded instruction form, and the
/// assembly text rendering used by the per-cycle trace.
pub mod isa;

/// Program loader.
///
/// Parses text assembly into code memory and validates it ahead of
/// simulation.
pub mod sim;

/// Simulation statistics collection and reporting.
///
/// Tracks cycle counts, instruction counts, stall counts, and the
/// instruction mix during simulation execution.
pub mod stats;
