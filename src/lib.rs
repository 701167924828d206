//! # Lexcheck
//!
//! A spell-checker for newline-delimited word lists.
//!
//! ## Features
//!
//! - Dictionary indexing by leading character for cheap candidate narrowing
//! - Fast single-edit heuristics: transposition, extra and missing character
//! - Character-multiset defect scoring as a bounded fallback
//! - Fixed-worker parallel fan-out over candidate batches

pub mod cli;
pub mod error;
pub mod parallel_check;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
