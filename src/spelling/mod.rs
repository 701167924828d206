//! Spell-checking core for lexcheck.
//!
//! This module provides the bucketed dictionary index, the three single-edit
//! matching heuristics, the defect-score fallback, and the per-candidate
//! verdict engine built on top of them.

pub mod defect;
pub mod dictionary;
pub mod engine;
pub mod heuristics;

// Re-export commonly used types
pub use defect::*;
pub use dictionary::*;
pub use engine::*;
pub use heuristics::*;
