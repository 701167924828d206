//! Fixed-worker fan-out of the match engine over a candidate batch.

use std::thread;

use crossbeam_channel::unbounded;
use log::debug;

use crate::error::Result;
use crate::parallel_check::config::ParallelCheckConfig;
use crate::parallel_check::task::{TaskResult, partition};
use crate::spelling::dictionary::DictionaryIndex;
use crate::spelling::engine::{CheckerConfig, MatchEngine, Verdict};

/// Dispatcher running the match engine over a candidate batch with a fixed
/// number of workers.
///
/// The dictionary index is built before any worker starts and stays
/// read-only for the workers' lifetime, so no locking is needed. Each worker
/// owns one contiguous slice of the candidate list and produces its own
/// verdict buffer; the controller joins all workers, then merges buffers by
/// slice index so the merged output is in original candidate order.
pub struct CheckDispatcher {
    config: ParallelCheckConfig,
    checker: CheckerConfig,
}

impl CheckDispatcher {
    /// Create a dispatcher with default configuration.
    pub fn new() -> Self {
        CheckDispatcher {
            config: ParallelCheckConfig::default(),
            checker: CheckerConfig::default(),
        }
    }

    /// Create a dispatcher with custom configuration.
    pub fn with_config(config: ParallelCheckConfig, checker: CheckerConfig) -> Self {
        CheckDispatcher { config, checker }
    }

    /// Number of workers used for a batch of the given size.
    pub fn worker_count(&self, candidates: usize) -> usize {
        if candidates < self.config.serial_threshold {
            1
        } else {
            self.config.worker_threads
        }
    }

    /// Check every candidate and return one verdict per candidate, in the
    /// original candidate order.
    pub fn check_all(&self, index: &DictionaryIndex, candidates: &[String]) -> Result<Vec<Verdict>> {
        let workers = self.worker_count(candidates.len());
        let tasks = partition(candidates.len(), workers);
        debug!(
            "checking {} candidates with {} worker(s)",
            candidates.len(),
            workers
        );

        let (tx, rx) = unbounded();

        let mut buffers = thread::scope(|scope| -> Result<Vec<TaskResult>> {
            for task in tasks {
                let tx = tx.clone();
                let slice = &candidates[task.range.clone()];
                let checker = self.checker.clone();
                scope.spawn(move || {
                    let engine = MatchEngine::with_config(index, checker);
                    let _ = tx.send(run_task(&engine, task.worker_id, slice));
                });
            }
            drop(tx);

            // The receive loop ends once every worker has sent its buffer
            // and dropped its sender, so collecting doubles as the join.
            let mut buffers = Vec::with_capacity(workers);
            for result in rx.iter() {
                buffers.push(result?);
            }
            Ok(buffers)
        })?;

        buffers.sort_by_key(|buffer| buffer.worker_id);
        Ok(buffers
            .into_iter()
            .flat_map(|buffer| buffer.verdicts)
            .collect())
    }
}

impl Default for CheckDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one worker's slice to completion, in candidate order.
fn run_task(engine: &MatchEngine<'_>, worker_id: usize, words: &[String]) -> Result<TaskResult> {
    let mut verdicts = Vec::with_capacity(words.len());
    for word in words {
        verdicts.push(engine.check(word)?);
    }
    Ok(TaskResult {
        worker_id,
        verdicts,
    })
}
