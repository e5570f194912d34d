use std::collections::HashMap;

use super::*;
use crate::movegen::legal_boards;
use crate::types::Checker;

fn multiset(boards: &[Board]) -> HashMap<Board, usize> {
    let mut counts = HashMap::new();
    for b in boards {
        *counts.entry(*b).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_depth_zero_is_the_start() {
    let b = Board::startpos();
    assert_eq!(expand(&b, 0, Side::Red), vec![b]);
    assert_eq!(expand_breadth_first(&b, 0, Side::Black), vec![b]);
    assert_eq!(count_leaves(&b, 0, Side::Red), 1);
}

#[test]
fn test_depth_one_matches_movegen() {
    let b = Board::startpos();
    assert_eq!(expand(&b, 1, Side::Red), legal_boards(&b, Side::Red));
    assert_eq!(expand(&b, 1, Side::Black), legal_boards(&b, Side::Black));
}

#[test]
fn test_depth_two_alternates_sides() {
    let b = Board::startpos();
    let leaves = expand(&b, 2, Side::Red);
    // the two front lines are not yet in contact: 7 x 7
    assert_eq!(leaves.len(), 49);
    for leaf in &leaves {
        let red_advanced = leaf
            .pieces()
            .filter(|p| p.side() == Side::Red && p.row == 4)
            .count();
        let black_advanced = leaf
            .pieces()
            .filter(|p| p.side() == Side::Black && p.row == 3)
            .count();
        assert_eq!((red_advanced, black_advanced), (1, 1));
    }
}

#[test]
fn test_side_without_moves_is_a_leaf_immediately() {
    let mut b = Board::empty();
    b.place(1, 0, Checker::man(Side::Red));
    b.place(0, 1, Checker::man(Side::Black));

    assert_eq!(expand(&b, 5, Side::Red), vec![b]);
    assert_eq!(expand_breadth_first(&b, 5, Side::Red), vec![b]);
    assert_eq!(count_leaves(&b, 5, Side::Red), 1);
}

#[test]
fn test_early_termination_keeps_intermediate_board() {
    let mut b = Board::empty();
    b.place(5, 2, Checker::man(Side::Red));
    b.place(4, 3, Checker::man(Side::Black));

    // Red takes Black's last piece; Black then has nothing to move.
    let mut after = Board::empty();
    after.place(3, 4, Checker::man(Side::Red));

    assert_eq!(expand(&b, 4, Side::Red), vec![after]);
    assert_eq!(expand_breadth_first(&b, 4, Side::Red), vec![after]);
    assert_eq!(count_leaves(&b, 4, Side::Red), 1);
}

#[test]
fn test_forced_capture_ends_game_early() {
    // The man on (0, 7) could step, but the capture on (3, 4) is forced and
    // leaves Red with nothing to move at ply 2.
    let mut b = Board::empty();
    b.place(2, 3, Checker::man(Side::Black));
    b.place(3, 4, Checker::man(Side::Red));
    b.place(0, 7, Checker::man(Side::Black));

    let leaves = expand(&b, 3, Side::Black);
    let mut after = Board::empty();
    after.place(4, 5, Checker::man(Side::Black));
    after.place(0, 7, Checker::man(Side::Black));
    assert_eq!(leaves, vec![after]);
}

#[test]
fn test_breadth_first_matches_depth_first() {
    let b = Board::startpos();
    for plies in 0..=5 {
        let dfs = expand(&b, plies, Side::Red);
        let bfs = expand_breadth_first(&b, plies, Side::Red);
        assert_eq!(dfs.len(), bfs.len(), "leaf count differs at {plies} plies");
        assert_eq!(multiset(&dfs), multiset(&bfs), "leaves differ at {plies} plies");
        assert_eq!(count_leaves(&b, plies, Side::Red), dfs.len() as u64);
    }
}

#[test]
fn test_leaves_keep_duplicates() {
    let b = Board::startpos();
    let leaves = expand(&b, 4, Side::Red);
    let distinct = multiset(&leaves).len();
    // transpositions are reached along several paths and reported each time
    assert!(distinct < leaves.len());
}
