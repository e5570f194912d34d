use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::types::*;

/// An 8x8 checkers position. Plain `Copy` value: successors are always
/// fresh copies, never edits of a board someone else holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Checker>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard opening setup: Black on the dark squares of rows 0-2,
    /// Red on the dark squares of rows 5-7.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for row in 0..BOARD_SIZE {
            let side = match row {
                0..=2 => Side::Black,
                5..=7 => Side::Red,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                if is_dark(row, col) {
                    b.place(row, col, Checker::man(side));
                }
            }
        }
        b
    }

    pub fn piece_at(&self, row: i8, col: i8) -> Option<Checker> {
        assert!(
            in_bounds(row, col),
            "square ({row}, {col}) is off the board"
        );
        self.squares[row as usize][col as usize]
    }

    pub fn is_vacant(&self, row: i8, col: i8) -> bool {
        self.piece_at(row, col).is_none()
    }

    /// Overwrite a square. Panics on an off-board square. Square colour is
    /// not checked here; see [`Board::validate`].
    pub fn set(&mut self, row: i8, col: i8, cell: Option<Checker>) {
        assert!(
            in_bounds(row, col),
            "square ({row}, {col}) is off the board"
        );
        self.squares[row as usize][col as usize] = cell;
    }

    pub fn place(&mut self, row: i8, col: i8, checker: Checker) {
        self.set(row, col, Some(checker));
    }

    pub fn remove(&mut self, row: i8, col: i8) {
        self.set(row, col, None);
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().enumerate().flat_map(|(r, cells)| {
            cells.iter().enumerate().filter_map(move |(c, cell)| {
                cell.map(|checker| Piece::new(r as i8, c as i8, checker))
            })
        })
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|p| p.side() == side).count()
    }

    /// Check the setup rules: pieces only on dark squares and at most
    /// [`MAX_PIECES`] per side. Successors of a valid board are valid.
    pub fn validate(&self) -> Result<(), BoardError> {
        if let Some(p) = self.pieces().find(|p| !is_dark(p.row, p.col)) {
            return Err(BoardError::LightSquare {
                row: p.row as usize,
                col: p.col as usize,
            });
        }
        for side in [Side::Red, Side::Black] {
            let count = self.count(side);
            if count > MAX_PIECES {
                return Err(BoardError::TooManyPieces { side, count });
            }
        }
        Ok(())
    }

    /// Move `piece` to an empty `(row, col)`, crowning it if it lands on its
    /// promotion row. Returns the successor and the piece as it now stands.
    pub fn step(&self, piece: Piece, row: i8, col: i8) -> (Board, Piece) {
        debug_assert_eq!(self.piece_at(piece.row, piece.col), Some(piece.checker));
        debug_assert!(self.is_vacant(row, col));

        let checker = if row == piece.side().promotion_row() {
            piece.checker.crowned()
        } else {
            piece.checker
        };

        let mut next = *self;
        next.remove(piece.row, piece.col);
        next.place(row, col, checker);
        (next, Piece::new(row, col, checker))
    }

    /// Jump `piece` over the neighbour in direction `(dr, dc)`, removing it.
    /// Caller has already checked the neighbour is an opponent and the
    /// landing square is empty.
    pub fn jump(&self, piece: Piece, (dr, dc): (i8, i8)) -> (Board, Piece) {
        let (mut next, moved) = self.step(piece, piece.row + 2 * dr, piece.col + 2 * dc);
        next.remove(piece.row + dr, piece.col + dc);
        (next, moved)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                let ch = cell.map_or('.', Checker::to_char);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Reads the `Display` rendering back. The column header and row labels
    /// are optional, as is whitespace between cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<String> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|line| !line.is_empty())
            // column header
            .filter(|line| !line.chars().all(|c| c.is_ascii_digit()))
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();

        for (row, line) in rows.iter().enumerate() {
            let cells = match line.chars().next() {
                Some(c) if c.is_ascii_digit() => &line[1..],
                _ => line.as_str(),
            };
            let width = cells.chars().count();
            if width != BOARD_SIZE as usize {
                return Err(BoardError::RowWidth { row, found: width });
            }

            for (col, ch) in cells.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let checker =
                    Checker::from_char(ch).ok_or(BoardError::UnknownCell { row, ch })?;
                board.place(row as i8, col as i8, checker);
            }
        }

        board.validate()?;
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
