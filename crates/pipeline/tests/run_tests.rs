use std::path::PathBuf;

use checkers_core::{Board, Side, expand};
use pipeline::{
    Evaluator, PipelineConfig, RootMode, RootSupply, RunSettings, RunSummary, Runner,
    SeededRoots, SlotFileSink, WorkerOutcome, render_record, roots_for,
};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pipeline-run-{}-{name}", std::process::id()))
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn standard_run_fills_every_slot() {
    let config = PipelineConfig {
        workers: 5,
        depth: 3,
        output: scratch("standard.out"),
        ..Default::default()
    };
    let sink = SlotFileSink::create(&config.output, config.slot_bytes).unwrap();
    let roots = roots_for(&config);
    let summary = Runner::new(
        RunSettings::from(&config),
        roots.as_ref(),
        &config.evaluator,
        &sink,
    )
    .run();

    assert!(summary.is_success());
    assert_eq!(summary.total_leaves(), 5 * 302);

    let len = std::fs::metadata(&config.output).unwrap().len();
    assert_eq!(len, (5 * config.slot_bytes) as u64);

    let leaves = expand(&Board::startpos(), 3, Side::Red);
    let score = config.evaluator.evaluate(&leaves);
    for worker in 0..5 {
        let record = sink.read(worker).unwrap().unwrap();
        assert_eq!(
            format!("{record}\n"),
            render_record(worker, &Board::startpos(), 302, score)
        );
    }

    std::fs::remove_file(&config.output).unwrap();
}

#[test]
fn records_name_their_root() {
    let config = PipelineConfig {
        workers: 3,
        depth: 2,
        roots: RootMode::Seeded,
        seed: 11,
        output: scratch("seeded.out"),
        ..Default::default()
    };
    let sink = SlotFileSink::create(&config.output, config.slot_bytes).unwrap();
    let roots = roots_for(&config);
    Runner::new(
        RunSettings::from(&config),
        roots.as_ref(),
        &config.evaluator,
        &sink,
    )
    .run();

    let seeded = SeededRoots::new(11);
    for worker in 0..3 {
        let record = sink.read(worker).unwrap().unwrap();
        let mut lines = record.lines();
        assert_eq!(lines.next(), Some(format!("worker {worker}").as_str()));

        // The slot carries the root board as rendered text
        let board_text: String = lines.by_ref().take(9).map(|l| format!("{l}\n")).collect();
        assert_eq!(board_text.parse::<Board>().unwrap(), seeded.root(worker));

        let last = lines.next().unwrap();
        assert!(last.starts_with("leaves "), "{last}");
    }

    std::fs::remove_file(&config.output).unwrap();
}

#[test]
fn summary_survives_disk() {
    let config = PipelineConfig {
        workers: 2,
        depth: 1,
        output: scratch("summary.out"),
        ..Default::default()
    };
    let sink = SlotFileSink::create(&config.output, config.slot_bytes).unwrap();
    let roots = roots_for(&config);
    let summary = Runner::new(
        RunSettings::from(&config),
        roots.as_ref(),
        &config.evaluator,
        &sink,
    )
    .run();

    let path = scratch("summary.json");
    summary.save(&path).unwrap();
    let loaded = RunSummary::load(&path).unwrap();
    assert_eq!(loaded, summary);
    assert!(matches!(loaded.outcomes[1], WorkerOutcome::Completed(ref r) if r.leaves == 7));

    std::fs::remove_file(&path).unwrap();
    std::fs::remove_file(&config.output).unwrap();
}

// ============================================================================
// Shipped configuration
// ============================================================================

#[test]
fn sample_config_parses() {
    let config =
        PipelineConfig::from_toml(include_str!("../../../config/pipeline.toml")).unwrap();
    assert_eq!(config.workers, 4);
    assert_eq!(config.roots, RootMode::Seeded);
    assert_eq!(config.first_to_move, Side::Red);
    assert_eq!(config.summary, Some(PathBuf::from("summary.json")));
    assert_eq!(config.evaluator.king_value, 150);
}

#[test]
fn records_read_back_with_configured_slot_size() {
    let config_path = scratch("wide.toml");
    let output = scratch("wide.out");
    std::fs::write(
        &config_path,
        format!("workers = 2\ndepth = 1\nslot_bytes = 1024\noutput = {:?}\n", output),
    )
    .unwrap();

    let config = PipelineConfig::load_or_default(Some(&config_path)).unwrap();
    assert_eq!(config.slot_bytes, 1024);
    let sink = SlotFileSink::create(&config.output, config.slot_bytes).unwrap();
    let roots = roots_for(&config);
    let summary = Runner::new(
        RunSettings::from(&config),
        roots.as_ref(),
        &config.evaluator,
        &sink,
    )
    .run();
    assert!(summary.is_success());

    // Reopened from the same config, worker 1 sits at 1024 bytes in.
    let reloaded = PipelineConfig::load_or_default(Some(&config_path)).unwrap();
    let reader = SlotFileSink::open(&reloaded.output, reloaded.slot_bytes);
    let record = reader.read(1).unwrap().unwrap();
    assert!(record.starts_with("worker 1\n"), "{record}");

    // The default slot size lands in the middle of worker 0's padding.
    let default_reader = SlotFileSink::open(&output, PipelineConfig::default().slot_bytes);
    let misread = default_reader.read(1).unwrap().unwrap_or_default();
    assert!(!misread.starts_with("worker 1"));

    std::fs::remove_file(&config_path).unwrap();
    std::fs::remove_file(&output).unwrap();
}
