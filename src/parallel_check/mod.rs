//! Parallel checking of candidate batches.
//!
//! The dispatcher splits the candidate list into contiguous slices, runs the
//! match engine over each slice on its own worker, and merges the per-worker
//! verdict buffers after all workers have joined.

pub mod config;
pub mod engine;
pub mod task;

// Re-export commonly used types
pub use config::*;
pub use engine::*;
pub use task::*;
