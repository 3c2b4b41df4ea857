//! Movement patterns of each piece kind.
//!
//! These checks look at occupancy (blocking, captures, castling lanes) but
//! never at king safety; that is the legality validator's job.

use crate::board::Board;
use crate::types::*;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Signed row/column displacement from `from` to `to`.
pub(crate) fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

pub(crate) fn is_orthogonal(dr: i8, dc: i8) -> bool {
    (dr == 0) != (dc == 0)
}

pub(crate) fn is_diagonal(dr: i8, dc: i8) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares sharing a row, column or diagonal; for anything
/// else it returns `false`.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    if !is_orthogonal(dr, dc) && !is_diagonal(dr, dc) {
        return false;
    }
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut cur = from.offset(step_r, step_c);
    while let Some(sq) = cur {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        cur = sq.offset(step_r, step_c);
    }
    false
}

fn not_own_piece(board: &Board, piece: &Piece, to: Square) -> bool {
    board
        .get_occupant(to)
        .is_none_or(|other| other.color != piece.color)
}

/// Can `piece` reach `to` by its movement rules on `board`?
pub fn geometric_validity(board: &Board, piece: &Piece, to: Square) -> bool {
    let (dr, dc) = delta(piece.square, to);
    if dr == 0 && dc == 0 {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_reaches(board, piece, to, dr, dc),
        PieceKind::Knight => {
            KNIGHT_OFFSETS.contains(&(dr, dc)) && not_own_piece(board, piece, to)
        }
        PieceKind::Bishop => {
            is_diagonal(dr, dc)
                && path_clear(board, piece.square, to)
                && not_own_piece(board, piece, to)
        }
        PieceKind::Rook { .. } => {
            is_orthogonal(dr, dc)
                && path_clear(board, piece.square, to)
                && not_own_piece(board, piece, to)
        }
        PieceKind::Queen => {
            (is_orthogonal(dr, dc) || is_diagonal(dr, dc))
                && path_clear(board, piece.square, to)
                && not_own_piece(board, piece, to)
        }
        PieceKind::King { has_moved } => {
            if dr.abs() <= 1 && dc.abs() <= 1 {
                not_own_piece(board, piece, to)
            } else {
                !has_moved
                    && dr == 0
                    && dc.abs() == 2
                    && piece.square.row() == piece.color.home_row()
                    && piece.square.col() == 4
                    && board.is_empty(to)
                    && castling_lane_open(board, piece, to)
            }
        }
    }
}

fn pawn_reaches(board: &Board, piece: &Piece, to: Square, dr: i8, dc: i8) -> bool {
    let fwd = piece.color.forward();

    if dc == 0 && dr == fwd {
        return board.is_empty(to);
    }
    if dc == 0 && dr == 2 * fwd && piece.square.row() == piece.color.pawn_row() {
        return piece
            .square
            .offset(fwd, 0)
            .is_some_and(|mid| board.is_empty(mid))
            && board.is_empty(to);
    }
    if dc.abs() == 1 && dr == fwd {
        return board
            .get_occupant(to)
            .is_some_and(|other| other.color != piece.color);
    }
    false
}

/// Occupancy half of the castling rule: an unmoved rook of our color in the
/// corner on that side, and nothing standing between it and the king.
fn castling_lane_open(board: &Board, king: &Piece, to: Square) -> bool {
    let Some((rook_sq, _)) = castling_rook_squares(king.square, to) else {
        return false;
    };
    let rook_ready = board.get_occupant(rook_sq).is_some_and(|rook| {
        rook.color == king.color && rook.kind == PieceKind::Rook { has_moved: false }
    });
    rook_ready && path_clear(board, king.square, rook_sq)
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
