//! Multi-jump capture search for a single piece.
//!
//! A capture sequence must be continued while the jumping piece still has a
//! capture available, so only maximal chains are emitted. Each jumped piece
//! is taken off the board before recursing, which is what keeps a chain from
//! jumping the same piece twice and guarantees termination.

use crate::{board::Board, types::*};

/// Boards reachable by one or more chained jumps of `piece`.
///
/// Every branching continuation is enumerated separately; no best line is
/// chosen. A man crowned mid-chain continues as a king.
pub fn capture_chains(board: &Board, piece: Piece) -> Vec<Board> {
    let mut out = Vec::new();
    for &dir in directions(piece.checker) {
        if !can_jump(board, piece, dir) {
            continue;
        }

        let (next, moved) = board.jump(piece, dir);
        let continuations = capture_chains(&next, moved);
        if continuations.is_empty() {
            out.push(next);
        } else {
            out.extend(continuations);
        }
    }
    out
}

/// Whether `piece` has at least one jump available.
pub fn has_jump(board: &Board, piece: Piece) -> bool {
    directions(piece.checker)
        .iter()
        .any(|&dir| can_jump(board, piece, dir))
}

fn can_jump(board: &Board, piece: Piece, (dr, dc): (i8, i8)) -> bool {
    let (land_row, land_col) = (piece.row + 2 * dr, piece.col + 2 * dc);
    if !in_bounds(land_row, land_col) {
        return false;
    }
    match board.piece_at(piece.row + dr, piece.col + dc) {
        Some(victim) if victim.side != piece.side() => board.is_vacant(land_row, land_col),
        _ => false,
    }
}

#[cfg(test)]
#[path = "captures_tests.rs"]
mod captures_tests;
