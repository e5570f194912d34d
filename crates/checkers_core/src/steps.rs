use crate::{board::Board, types::*};

/// Boards reachable by one diagonal step of `piece` onto an empty square.
pub fn simple_moves(board: &Board, piece: Piece) -> Vec<Board> {
    let mut out = Vec::with_capacity(4);
    for &(dr, dc) in directions(piece.checker) {
        let (row, col) = (piece.row + dr, piece.col + dc);
        if in_bounds(row, col) && board.is_vacant(row, col) {
            out.push(board.step(piece, row, col).0);
        }
    }
    out
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod steps_tests;
