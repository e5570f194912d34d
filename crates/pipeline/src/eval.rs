//! Scoring of a worker's leaf batch.
//!
//! The pipeline treats the evaluator as an oracle: it hands over every leaf
//! of one expansion and gets a single number back.

use checkers_core::{Board, PieceKind, Side};
use serde::{Deserialize, Serialize};

pub trait Evaluator: Sync {
    /// Score a full leaf batch. Positive favours Red.
    fn evaluate(&self, leaves: &[Board]) -> i64;
}

/// Material count summed over every leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialEvaluator {
    pub man_value: i64,
    pub king_value: i64,
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self {
            man_value: 100,
            king_value: 150,
        }
    }
}

impl MaterialEvaluator {
    /// Red material minus Black material on one board
    pub fn material(&self, board: &Board) -> i64 {
        board
            .pieces()
            .map(|p| {
                let v = match p.checker.kind {
                    PieceKind::Man => self.man_value,
                    PieceKind::King => self.king_value,
                };
                if p.side() == Side::Red { v } else { -v }
            })
            .sum()
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, leaves: &[Board]) -> i64 {
        leaves.iter().map(|b| self.material(b)).sum()
    }
}
