//! Errors for boards entering the system from outside the move generator.
//!
//! Off-board coordinates are a caller bug and panic; a board read from text
//! or assembled by hand can break the setup rules, and that is recoverable.

use thiserror::Error;

use crate::types::Side;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 cells, found {found}")]
    RowWidth { row: usize, found: usize },

    #[error("row {row}: unknown cell character {ch:?}")]
    UnknownCell { row: usize, ch: char },

    #[error("piece on light square ({row}, {col})")]
    LightSquare { row: usize, col: usize },

    #[error("{side} has {count} pieces, at most 12 are allowed")]
    TooManyPieces { side: Side, count: usize },
}
