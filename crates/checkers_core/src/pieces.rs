use crate::{board::Board, types::*};

/// All of `side`'s pieces in row-major scan order.
///
/// Panics if the side owns more than [`MAX_PIECES`]: legal play can never
/// get there, so a board that does was built wrong.
pub fn index_pieces(board: &Board, side: Side) -> Vec<Piece> {
    let mut out = Vec::with_capacity(MAX_PIECES);
    for piece in board.pieces().filter(|p| p.side() == side) {
        assert!(
            out.len() < MAX_PIECES,
            "{side} owns more than {MAX_PIECES} pieces:\n{board}"
        );
        out.push(piece);
    }
    out
}

#[cfg(test)]
#[path = "pieces_tests.rs"]
mod pieces_tests;
