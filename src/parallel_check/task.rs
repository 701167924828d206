//! Check task definitions for parallel execution.

use std::ops::Range;

use crate::spelling::engine::Verdict;

/// One worker's contiguous slice of the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTask {
    /// Slice index, also the merge position of this worker's verdicts.
    pub worker_id: usize,

    /// Candidate-list range owned by this worker.
    pub range: Range<usize>,
}

/// The verdict buffer produced by one worker.
///
/// Verdicts are in candidate order within the slice; ordering across workers
/// is restored by merging buffers by `worker_id`.
#[derive(Debug, Clone)]
pub struct TaskResult {
    /// Slice index of the worker that produced this buffer.
    pub worker_id: usize,

    /// Verdicts for the worker's slice, in candidate order.
    pub verdicts: Vec<Verdict>,
}

/// Split `len` candidates into `workers` contiguous near-equal slices.
///
/// The last slice absorbs any remainder, so the partition covers the full
/// list exactly once with no overlap and no gap.
pub fn partition(len: usize, workers: usize) -> Vec<CheckTask> {
    let part = len / workers;
    (0..workers)
        .map(|i| {
            let start = i * part;
            let end = if i == workers - 1 { len } else { (i + 1) * part };
            CheckTask {
                worker_id: i,
                range: start..end,
            }
        })
        .collect()
}
