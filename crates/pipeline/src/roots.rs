//! Starting boards handed to each worker

use checkers_core::{BOARD_SIZE, Board, Checker, MAX_PIECES, Side, is_dark};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{PipelineConfig, RootMode};

/// Deterministically maps a worker id to its root board.
pub trait RootSupply: Sync {
    fn root(&self, worker: usize) -> Board;
}

/// Every worker expands the opening position.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRoots;

impl RootSupply for StandardRoots {
    fn root(&self, _worker: usize) -> Board {
        Board::startpos()
    }
}

/// Random placements, reproducible per worker.
///
/// Each side gets between 1 and 12 pieces on distinct dark squares. A man
/// dropped on its own promotion row starts out crowned. One dropped on its
/// own back row stays a man: only the row it promotes on crowns it.
#[derive(Debug, Clone, Copy)]
pub struct SeededRoots {
    seed: u64,
}

impl SeededRoots {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RootSupply for SeededRoots {
    fn root(&self, worker: usize) -> Board {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(worker as u64));

        let mut squares: Vec<(i8, i8)> = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| is_dark(row, col))
            .collect();
        squares.shuffle(&mut rng);

        let red = rng.gen_range(1..=MAX_PIECES);
        let black = rng.gen_range(1..=MAX_PIECES);

        let mut board = Board::empty();
        for (i, &(row, col)) in squares.iter().take(red + black).enumerate() {
            let side = if i < red { Side::Red } else { Side::Black };
            let checker = if row == side.promotion_row() {
                Checker::king(side)
            } else {
                Checker::man(side)
            };
            board.place(row, col, checker);
        }
        board
    }
}

/// Root supply selected by the configuration
pub fn roots_for(config: &PipelineConfig) -> Box<dyn RootSupply> {
    match config.roots {
        RootMode::Standard => Box::new(StandardRoots),
        RootMode::Seeded => Box::new(SeededRoots::new(config.seed)),
    }
}

#[cfg(test)]
#[path = "roots_tests.rs"]
mod roots_tests;
