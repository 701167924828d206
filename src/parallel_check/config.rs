//! Configuration for parallel word checking.

use serde::{Deserialize, Serialize};

/// Configuration for the check dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelCheckConfig {
    /// Number of worker threads used for large batches.
    pub worker_threads: usize,

    /// Batches with fewer candidates than this run on a single worker.
    pub serial_threshold: usize,
}

impl Default for ParallelCheckConfig {
    fn default() -> Self {
        Self {
            worker_threads: 4,
            serial_threshold: 10,
        }
    }
}
