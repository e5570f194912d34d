use super::*;
use crate::eval::MaterialEvaluator;
use crate::roots::{SeededRoots, StandardRoots};
use crate::sink::MemorySink;
use crate::worker::render_record;
use checkers_core::{Board, expand};

fn settings(workers: usize, depth: u8) -> RunSettings {
    RunSettings {
        workers,
        depth,
        first_to_move: Side::Red,
    }
}

/// Panics for one worker, otherwise hands out the opening.
struct PanickyRoots {
    bad: usize,
}

impl RootSupply for PanickyRoots {
    fn root(&self, worker: usize) -> Board {
        if worker == self.bad {
            panic!("no root for worker {worker}");
        }
        Board::startpos()
    }
}

#[test]
fn test_every_worker_reports() {
    let sink = MemorySink::new();
    let eval = MaterialEvaluator::default();
    let summary = Runner::new(settings(6, 2), &StandardRoots, &eval, &sink).run();

    assert!(summary.is_success());
    assert_eq!(summary.outcomes.len(), 6);
    for (i, outcome) in summary.outcomes.iter().enumerate() {
        assert_eq!(outcome.worker(), i);
    }
    assert_eq!(summary.total_leaves(), 6 * 49);
    assert_eq!(sink.records().len(), 6);
}

#[test]
fn test_workers_expand_their_own_roots() {
    let sink = MemorySink::new();
    let eval = MaterialEvaluator::default();
    let roots = SeededRoots::new(42);
    let summary = Runner::new(settings(4, 2), &roots, &eval, &sink).run();

    let records = sink.records();
    for report in summary.completed() {
        let root = roots.root(report.worker);
        let leaves = expand(&root, 2, Side::Red);
        assert_eq!(report.leaves, leaves.len());
        assert_eq!(report.score, eval.evaluate(&leaves));
        assert_eq!(
            records[&report.worker],
            render_record(report.worker, &root, report.leaves, report.score)
        );
    }
    assert_eq!(summary.completed().count(), 4);
}

#[test]
fn test_panicking_worker_is_isolated() {
    let sink = MemorySink::new();
    let eval = MaterialEvaluator::default();
    let roots = PanickyRoots { bad: 1 };
    let summary = Runner::new(settings(3, 1), &roots, &eval, &sink).run();

    assert!(!summary.is_success());
    let failed: Vec<(usize, &str)> = summary.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, 1);
    assert!(failed[0].1.contains("no root for worker 1"));

    assert_eq!(summary.completed().count(), 2);
    let records = sink.records();
    assert!(records.contains_key(&0));
    assert!(!records.contains_key(&1));
    assert!(records.contains_key(&2));
}

#[test]
fn test_settings_from_config() {
    let config = PipelineConfig {
        workers: 9,
        depth: 3,
        first_to_move: Side::Black,
        ..Default::default()
    };
    assert_eq!(
        RunSettings::from(&config),
        RunSettings {
            workers: 9,
            depth: 3,
            first_to_move: Side::Black
        }
    );
}
