//! Tree expansion benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example expand_bench -p checkers_core -- [plies] [board-file]
//!
//! Examples:
//!   # Default: 8 plies from the opening, both sides to move first
//!   cargo flamegraph --example expand_bench -p checkers_core
//!
//!   # Custom depth
//!   cargo flamegraph --example expand_bench -p checkers_core -- 9
//!
//!   # Custom depth and position (rendered board text, as written by the pipeline)
//!   cargo flamegraph --example expand_bench -p checkers_core -- 6 root.txt

use checkers_core::{Board, Side, count_leaves, expand};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let plies: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    // If a board file is given, use single position mode
    if let Some(path) = args.get(2) {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Failed to read {path}: {e}");
                return;
            }
        };
        match text.parse::<Board>() {
            Ok(board) => run_single_position(&board, plies),
            Err(e) => eprintln!("Invalid board in {path}: {e}"),
        }
    } else {
        run_opening(plies);
    }
}

fn run_single_position(board: &Board, plies: u8) {
    println!("{board}");
    println!("Plies: {plies}");
    println!();

    let start = Instant::now();
    let leaves = expand(board, plies, Side::Red);
    let elapsed = start.elapsed();

    let lps = if elapsed.as_secs_f64() > 0.0 {
        leaves.len() as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Leaves: {}", leaves.len());
    println!("Time: {elapsed:.3?}");
    println!("Leaves/s: {lps:.0}");
}

fn run_opening(plies: u8) {
    println!("=== Expansion Benchmark ===");
    println!("Plies: {plies}");
    println!();

    let board = Board::startpos();
    let mut total_leaves = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, side) in [("Red first", Side::Red), ("Black first", Side::Black)] {
        print!("{name:.<30}");

        let start = Instant::now();
        let leaves = count_leaves(&board, plies, side);
        let elapsed = start.elapsed();

        total_leaves += leaves;
        total_time += elapsed;

        let lps = if elapsed.as_secs_f64() > 0.0 {
            leaves as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {leaves:>12} leaves in {elapsed:>8.3?} ({lps:>10.0} leaves/s)");
    }

    println!();
    println!("{:=<70}", "");
    let total_lps = if total_time.as_secs_f64() > 0.0 {
        total_leaves as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_leaves} leaves in {total_time:.3?} ({total_lps:.0} leaves/s)");
}
