use std::fmt;

use crate::error::BoardError;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::ROOK,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::KING,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::ROOK,
];

/// The 8x8 grid. Each cell owns at most one piece and every piece records the
/// square of the cell that holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        for color in [Color::White, Color::Black] {
            let home = color.home_row();
            let pawns = color.pawn_row();
            for col in 0..8u8 {
                b.cells[pawns as usize][col as usize] = Square::new(pawns, col)
                    .map(|sq| Piece::new(color, PieceKind::Pawn, sq));
                b.cells[home as usize][col as usize] = Square::new(home, col)
                    .map(|sq| Piece::new(color, BACK_RANK[col as usize], sq));
            }
        }
        b
    }

    /// Build a board from loose pieces, checking every invariant.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut b = Board::empty();
        for pc in pieces {
            b.place(pc)?;
        }
        Ok(b)
    }

    /// Put a new piece on the empty cell named by its own square.
    pub fn place(&mut self, pc: Piece) -> Result<(), BoardError> {
        if self.get_occupant(pc.square).is_some() {
            return Err(BoardError::Occupied(pc.square));
        }
        if pc.kind.is_king() && self.king_sq(pc.color).is_some() {
            return Err(BoardError::TooManyKings(pc.color));
        }
        self.set_cell(pc.square, Some(pc));
        Ok(())
    }

    pub fn get_occupant(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get_occupant(sq).is_none()
    }

    /// Full grid, indexed `[row][col]`.
    pub fn cells(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |pc| pc.color == color)
    }

    pub fn king_sq(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|pc| pc.kind.is_king())
            .map(|pc| pc.square)
    }

    /// Raw cell write. Callers keep the piece's square in sync.
    pub(crate) fn set_cell(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Move whatever stands on `from` to `to`, updating its square.
    /// Returns the piece previously on `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let displaced = self.take(to);
        if let Some(mut pc) = moving {
            pc.square = to;
            self.set_cell(to, Some(pc));
        }
        displaced
    }

    /// Check that every piece sits where it thinks it does and that neither
    /// side has two kings.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut kings = [0u8; 2];
        for sq in Square::all() {
            if let Some(pc) = self.get_occupant(sq) {
                if pc.square != sq {
                    return Err(BoardError::Misplaced {
                        cell: sq,
                        recorded: pc.square,
                    });
                }
                if pc.kind.is_king() {
                    let idx = match pc.color {
                        Color::White => 0,
                        Color::Black => 1,
                    };
                    kings[idx] += 1;
                    if kings[idx] > 1 {
                        return Err(BoardError::TooManyKings(pc.color));
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{row} ")?;
            for col in 0..8 {
                let c = self.cells[row][col].map_or('.', |pc| pc.symbol());
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..8 {
            write!(f, " {col}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
