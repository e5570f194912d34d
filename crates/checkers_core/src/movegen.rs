use crate::{
    board::Board,
    captures::{capture_chains, has_jump},
    pieces::index_pieces,
    steps::simple_moves,
    types::Side,
};

/// Generate every legal successor for `side`, returning a freshly allocated vector.
/// Internally delegates to `legal_boards_into`.
pub fn legal_boards(board: &Board, side: Side) -> Vec<Board> {
    let mut out = Vec::with_capacity(32);
    legal_boards_into(board, side, &mut out);
    out
}

/// Generate every legal successor into the provided buffer, reusing it across calls.
///
/// Captures are mandatory: if any piece of `side` can jump, only capture
/// sequences are legal, for every piece of the side. An empty result means
/// the side has no move.
pub fn legal_boards_into(board: &Board, side: Side, out: &mut Vec<Board>) {
    out.clear();
    let pieces = index_pieces(board, side);

    for &piece in &pieces {
        out.extend(capture_chains(board, piece));
    }
    if !out.is_empty() {
        return;
    }

    for &piece in &pieces {
        out.extend(simple_moves(board, piece));
    }
}

/// Every maximal capture sequence available to `side`.
pub fn captures_for(board: &Board, side: Side) -> Vec<Board> {
    index_pieces(board, side)
        .into_iter()
        .flat_map(|piece| capture_chains(board, piece))
        .collect()
}

/// Every single-step move available to `side`, ignoring the capture rule.
pub fn simple_moves_for(board: &Board, side: Side) -> Vec<Board> {
    index_pieces(board, side)
        .into_iter()
        .flat_map(|piece| simple_moves(board, piece))
        .collect()
}

pub fn has_capture(board: &Board, side: Side) -> bool {
    index_pieces(board, side)
        .into_iter()
        .any(|piece| has_jump(board, piece))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
