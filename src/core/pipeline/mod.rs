//! APEX pipeline plumbing.
//!
//! This module contains the inter-stage latch carried between the five
//! pipeline stages and the per-register scoreboard used for data-hazard
//! interlocking in Decode.

/// Inter-stage pipeline latch (F/D, D/X, X/M, M/W).
pub mod latches;

/// Per-register busy scoreboard.
pub mod scoreboard;

pub use latches::StageLatch;
pub use scoreboard::Scoreboard;
