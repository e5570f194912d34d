//! One worker's share of a run: expand its root, score the leaves, store the record.

use std::time::Instant;

use checkers_core::{Board, Side, expand};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::eval::Evaluator;
use crate::roots::RootSupply;
use crate::sink::ResultSink;

/// Search parameters shared by every worker of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSettings {
    pub depth: u8,
    pub first_to_move: Side,
}

/// What a finished worker reports back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReport {
    pub worker: usize,
    pub leaves: usize,
    pub score: i64,
    pub elapsed_ms: u64,
}

/// Text stored in a worker's output slot.
///
/// ```text
/// worker 3
///    0 1 2 3 4 5 6 7
/// 0  . b . b . b . b
/// ...
/// leaves 302 score 0
/// ```
pub fn render_record(worker: usize, root: &Board, leaves: usize, score: i64) -> String {
    format!("worker {worker}\n{root}leaves {leaves} score {score}\n")
}

pub fn run_worker(
    worker: usize,
    settings: WorkerSettings,
    roots: &dyn RootSupply,
    evaluator: &dyn Evaluator,
    sink: &dyn ResultSink,
) -> Result<WorkerReport, PipelineError> {
    let start = Instant::now();

    let root = roots.root(worker);
    root.validate()
        .map_err(|source| PipelineError::InvalidRoot { worker, source })?;

    let leaves = expand(&root, settings.depth, settings.first_to_move);
    let score = evaluator.evaluate(&leaves);
    debug!(worker, leaves = leaves.len(), score, "scored leaves");

    sink.write(worker, &render_record(worker, &root, leaves.len(), score))?;

    let report = WorkerReport {
        worker,
        leaves: leaves.len(),
        score,
        elapsed_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        worker,
        leaves = report.leaves,
        score,
        elapsed_ms = report.elapsed_ms,
        "worker finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
