//! Runs every worker of a pipeline side by side

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use checkers_core::Side;
use rayon::prelude::*;
use tracing::{error, info};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, error_chain};
use crate::eval::Evaluator;
use crate::results::{RunSummary, WorkerOutcome};
use crate::roots::RootSupply;
use crate::sink::ResultSink;
use crate::worker::{WorkerSettings, run_worker};

/// Shape of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Number of workers; worker ids are `0..workers`
    pub workers: usize,
    /// Plies expanded below each root
    pub depth: u8,
    pub first_to_move: Side,
}

impl From<&PipelineConfig> for RunSettings {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            workers: config.workers,
            depth: config.depth,
            first_to_move: config.first_to_move,
        }
    }
}

/// Drives one run over pluggable roots, evaluator and sink.
///
/// Workers share nothing but these read-only components. A worker that
/// fails or panics is recorded as failed; the others carry on.
pub struct Runner<'a> {
    settings: RunSettings,
    roots: &'a dyn RootSupply,
    evaluator: &'a dyn Evaluator,
    sink: &'a dyn ResultSink,
}

impl<'a> Runner<'a> {
    pub fn new(
        settings: RunSettings,
        roots: &'a dyn RootSupply,
        evaluator: &'a dyn Evaluator,
        sink: &'a dyn ResultSink,
    ) -> Self {
        Self {
            settings,
            roots,
            evaluator,
            sink,
        }
    }

    pub fn settings(&self) -> RunSettings {
        self.settings
    }

    /// Run all workers and collect their outcomes, ordered by worker id
    pub fn run(&self) -> RunSummary {
        let start = Instant::now();
        info!(
            workers = self.settings.workers,
            depth = self.settings.depth,
            first_to_move = %self.settings.first_to_move,
            "starting run"
        );

        let outcomes: Vec<WorkerOutcome> = (0..self.settings.workers)
            .into_par_iter()
            .map(|worker| self.run_one(worker))
            .collect();

        let summary = RunSummary {
            depth: self.settings.depth,
            first_to_move: self.settings.first_to_move,
            workers: self.settings.workers,
            elapsed_ms: start.elapsed().as_millis() as u64,
            outcomes,
        };
        info!(
            completed = summary.completed().count(),
            failed = summary.failed().count(),
            leaves = summary.total_leaves(),
            elapsed_ms = summary.elapsed_ms,
            "run finished"
        );
        summary
    }

    fn run_one(&self, worker: usize) -> WorkerOutcome {
        let settings = WorkerSettings {
            depth: self.settings.depth,
            first_to_move: self.settings.first_to_move,
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            run_worker(worker, settings, self.roots, self.evaluator, self.sink)
        }))
        .unwrap_or_else(|payload| {
            Err(PipelineError::Panicked {
                worker,
                message: panic_message(payload.as_ref()),
            })
        });

        match result {
            Ok(report) => WorkerOutcome::Completed(report),
            Err(e) => {
                let message = error_chain(&e);
                error!(worker, error = %message, "worker failed");
                WorkerOutcome::Failed {
                    worker,
                    error: message,
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
