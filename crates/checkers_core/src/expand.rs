//! Bounded-depth game tree expansion.
//!
//! A node is `(board, plies remaining, side to move)`. A node whose side has
//! no legal move is itself a leaf, whatever depth it sits at; otherwise its
//! children are leaves once the last ply is spent. The tree is never
//! deduplicated: transpositions show up once per path.

use std::collections::VecDeque;

use tracing::debug;

use crate::{board::Board, movegen::legal_boards_into, types::Side};

/// All leaf boards `plies` half-moves below `board`, `side` moving first.
/// Depth-first; leaves come out in generation order.
pub fn expand(board: &Board, plies: u8, side: Side) -> Vec<Board> {
    if plies == 0 {
        return vec![*board];
    }

    fn inner(
        board: &Board,
        plies: u8,
        side: Side,
        layers: &mut [Vec<Board>],
        leaves: &mut Vec<Board>,
    ) {
        let (buf, rest) = layers
            .split_first_mut()
            .expect("expand requires one buffer per remaining ply");

        legal_boards_into(board, side, buf);

        if buf.is_empty() {
            leaves.push(*board);
        } else if plies == 1 {
            leaves.extend_from_slice(buf);
        } else {
            for child in buf.iter() {
                inner(child, plies - 1, side.other(), rest, leaves);
            }
        }
    }

    let mut layers = vec![Vec::with_capacity(32); plies as usize];
    let mut leaves = Vec::new();
    inner(board, plies, side, &mut layers[..], &mut leaves);

    debug!(plies, %side, leaves = leaves.len(), "expanded tree");
    leaves
}

/// Same leaf multiset as [`expand`], grown level by level from a work queue.
pub fn expand_breadth_first(board: &Board, plies: u8, side: Side) -> Vec<Board> {
    let mut queue = VecDeque::new();
    queue.push_back((*board, plies, side));

    let mut leaves = Vec::new();
    let mut children = Vec::with_capacity(32);

    while let Some((node, remaining, to_move)) = queue.pop_front() {
        if remaining == 0 {
            leaves.push(node);
            continue;
        }

        legal_boards_into(&node, to_move, &mut children);
        if children.is_empty() {
            leaves.push(node);
            continue;
        }
        queue.extend(
            children
                .drain(..)
                .map(|child| (child, remaining - 1, to_move.other())),
        );
    }

    debug!(plies, %side, leaves = leaves.len(), "expanded tree breadth-first");
    leaves
}

/// Number of leaves [`expand`] would return, without keeping the boards.
pub fn count_leaves(board: &Board, plies: u8, side: Side) -> u64 {
    if plies == 0 {
        return 1;
    }

    fn inner(board: &Board, plies: u8, side: Side, layers: &mut [Vec<Board>]) -> u64 {
        let (buf, rest) = layers
            .split_first_mut()
            .expect("count_leaves requires one buffer per remaining ply");

        legal_boards_into(board, side, buf);

        if buf.is_empty() {
            return 1;
        }
        if plies == 1 {
            return buf.len() as u64;
        }

        let mut leaves = 0u64;
        for child in buf.iter() {
            leaves += inner(child, plies - 1, side.other(), rest);
        }
        leaves
    }

    let mut layers = vec![Vec::with_capacity(32); plies as usize];
    inner(board, plies, side, &mut layers[..])
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod expand_tests;
