use std::fmt;

pub const BOARD_SIZE: i8 = 8;

/// Most pieces a side can own under legal play.
pub const MAX_PIECES: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Black,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }
    /// Row delta of a man's forward step. Red plays up the board toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }
    /// Row on which this side's men are crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Side::Red => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.write_str("red"),
            Side::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// Occupant of a single square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Checker {
    pub side: Side,
    pub kind: PieceKind,
}

impl Checker {
    pub const fn man(side: Side) -> Self {
        Self {
            side,
            kind: PieceKind::Man,
        }
    }
    pub const fn king(side: Side) -> Self {
        Self {
            side,
            kind: PieceKind::King,
        }
    }
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }
    pub fn crowned(self) -> Self {
        Self::king(self.side)
    }

    pub fn to_char(self) -> char {
        match (self.side, self.kind) {
            (Side::Red, PieceKind::Man) => 'r',
            (Side::Red, PieceKind::King) => 'R',
            (Side::Black, PieceKind::Man) => 'b',
            (Side::Black, PieceKind::King) => 'B',
        }
    }
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Self::man(Side::Red)),
            'R' => Some(Self::king(Side::Red)),
            'b' => Some(Self::man(Side::Black)),
            'B' => Some(Self::king(Side::Black)),
            _ => None,
        }
    }
}

/// A checker together with the square it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub row: i8,
    pub col: i8,
    pub checker: Checker,
}

impl Piece {
    pub fn new(row: i8, col: i8, checker: Checker) -> Self {
        Self { row, col, checker }
    }
    pub fn side(&self) -> Side {
        self.checker.side
    }
    pub fn is_king(&self) -> bool {
        self.checker.is_king()
    }
}

const RED_MAN_DIRS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const BLACK_MAN_DIRS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const KING_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal unit vectors `(d_row, d_col)` a checker may travel along.
/// Jumps use the same vectors scaled by two.
pub fn directions(checker: Checker) -> &'static [(i8, i8)] {
    match (checker.kind, checker.side) {
        (PieceKind::King, _) => &KING_DIRS,
        (PieceKind::Man, Side::Red) => &RED_MAN_DIRS,
        (PieceKind::Man, Side::Black) => &BLACK_MAN_DIRS,
    }
}

// Helpers
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
}
pub fn is_dark(row: i8, col: i8) -> bool {
    (row + col) % 2 == 1
}
