//! Run summaries: storage and reporting

use std::path::Path;

use checkers_core::Side;
use serde::{Deserialize, Serialize};

use crate::config::SideDef;
use crate::error::PipelineError;
use crate::worker::WorkerReport;

/// Everything a run produced besides the slot file itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub depth: u8,
    #[serde(with = "SideDef")]
    pub first_to_move: Side,
    pub workers: usize,
    pub elapsed_ms: u64,
    /// One entry per worker, in worker order
    pub outcomes: Vec<WorkerOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WorkerOutcome {
    Completed(WorkerReport),
    Failed { worker: usize, error: String },
}

impl WorkerOutcome {
    pub fn worker(&self) -> usize {
        match self {
            WorkerOutcome::Completed(report) => report.worker,
            WorkerOutcome::Failed { worker, .. } => *worker,
        }
    }
}

impl RunSummary {
    pub fn completed(&self) -> impl Iterator<Item = &WorkerReport> {
        self.outcomes.iter().filter_map(|o| match o {
            WorkerOutcome::Completed(report) => Some(report),
            WorkerOutcome::Failed { .. } => None,
        })
    }

    /// `(worker, error)` for every failed worker
    pub fn failed(&self) -> impl Iterator<Item = (usize, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            WorkerOutcome::Failed { worker, error } => Some((*worker, error.as_str())),
            WorkerOutcome::Completed(_) => None,
        })
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn total_leaves(&self) -> usize {
        self.completed().map(|r| r.leaves).sum()
    }

    /// Save summary to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), PipelineError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load summary from a JSON file
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Run: {} workers, depth {}, {} first ===\n\n",
            self.workers, self.depth, self.first_to_move
        ));

        report.push_str(&format!(
            "{:>6} {:>12} {:>14} {:>10}\n",
            "Worker", "Leaves", "Score", "Time (ms)"
        ));
        report.push_str(&"-".repeat(45));
        report.push('\n');

        for outcome in &self.outcomes {
            match outcome {
                WorkerOutcome::Completed(r) => report.push_str(&format!(
                    "{:>6} {:>12} {:>14} {:>10}\n",
                    r.worker, r.leaves, r.score, r.elapsed_ms
                )),
                WorkerOutcome::Failed { worker, error } => {
                    report.push_str(&format!("{:>6} FAILED: {}\n", worker, error))
                }
            }
        }

        report.push('\n');
        report.push_str(&format!(
            "Total leaves: {} ({} completed, {} failed) in {} ms\n",
            self.total_leaves(),
            self.completed().count(),
            self.failed().count(),
            self.elapsed_ms
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
