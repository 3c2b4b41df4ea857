use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding this color's pieces at the start of a game.
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row this color's pawns start on.
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kinds. Only rooks and kings take part in castling, so only they
/// carry a has-moved flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook { has_moved: bool },
    Queen,
    King { has_moved: bool },
}

impl PieceKind {
    pub const ROOK: PieceKind = PieceKind::Rook { has_moved: false };
    pub const KING: PieceKind = PieceKind::King { has_moved: false };

    pub fn is_king(self) -> bool {
        matches!(self, PieceKind::King { .. })
    }

    pub fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook { .. })
    }

    /// Castling eligibility bit. `None` for kinds that do not track it.
    pub fn has_moved(self) -> Option<bool> {
        match self {
            PieceKind::Rook { has_moved } | PieceKind::King { has_moved } => Some(has_moved),
            PieceKind::Pawn | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => None,
        }
    }

    /// Same kind with its has-moved flag set. Other kinds are returned as is.
    pub fn moved(self) -> PieceKind {
        match self {
            PieceKind::Rook { .. } => PieceKind::Rook { has_moved: true },
            PieceKind::King { .. } => PieceKind::King { has_moved: true },
            other => other,
        }
    }

    /// Uppercase letter used in diagrams and FEN.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook { .. } => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King { .. } => 'K',
        }
    }
}

/// A board coordinate. Row 0 is white's home rank, column 0 the a-file.
///
/// Both components are always in `0..8`; the only ways to build one are
/// bounds-checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square displaced by `(dr, dc)`, or `None` when that leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row starting at white's home rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = String;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or_else(|| format!("square ({row}, {col}) is off the board"))
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Self {
            color,
            kind,
            square,
        }
    }

    /// Diagram letter: uppercase for white, lowercase for black.
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

/// An origin/destination pair. Castling is a king move of two columns and is
/// not tagged separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Where the rook of a castling move starts and ends, given the king's move.
///
/// Returns `None` unless `from -> to` is a two-column move along one row.
pub fn castling_rook_squares(from: Square, to: Square) -> Option<(Square, Square)> {
    if from.row() != to.row() || from.col().abs_diff(to.col()) != 2 {
        return None;
    }
    let row = from.row();
    if to.col() > from.col() {
        Some((Square::new(row, 7)?, Square::new(row, to.col() - 1)?))
    } else {
        Some((Square::new(row, 0)?, Square::new(row, to.col() + 1)?))
    }
}
