//! Attack detection.
//!
//! A square is attacked when some opposing piece could capture on it if it
//! were that piece's turn. Pawns attack only diagonally forward, whatever the
//! occupancy of the target square; castling never counts as an attack.

use crate::board::Board;
use crate::geometry::{KING_OFFSETS, KNIGHT_OFFSETS, delta, is_diagonal, is_orthogonal, path_clear};
use crate::types::*;

/// Does any piece not of `defender`'s color attack `target`?
///
/// A piece standing on `target` itself is never counted as its attacker.
pub fn is_attacked(board: &Board, target: Square, defender: Color) -> bool {
    board
        .pieces()
        .filter(|pc| pc.color != defender && pc.square != target)
        .any(|pc| attacks_square(board, &pc, target))
}

/// Whether `attacker`'s capture pattern covers `target` on this board.
pub fn attacks_square(board: &Board, attacker: &Piece, target: Square) -> bool {
    let (dr, dc) = delta(attacker.square, target);

    match attacker.kind {
        PieceKind::Pawn => dr == attacker.color.forward() && dc.abs() == 1,
        PieceKind::Knight => KNIGHT_OFFSETS.contains(&(dr, dc)),
        PieceKind::King { .. } => KING_OFFSETS.contains(&(dr, dc)),
        PieceKind::Bishop => is_diagonal(dr, dc) && path_clear(board, attacker.square, target),
        PieceKind::Rook { .. } => {
            is_orthogonal(dr, dc) && path_clear(board, attacker.square, target)
        }
        PieceKind::Queen => {
            (is_orthogonal(dr, dc) || is_diagonal(dr, dc))
                && path_clear(board, attacker.square, target)
        }
    }
}

/// Squares covered by `attacker`. Used for diagnostics and tests.
pub fn attacked_squares(board: &Board, attacker: &Piece) -> Vec<Square> {
    Square::all()
        .filter(|&sq| sq != attacker.square && attacks_square(board, attacker, sq))
        .collect()
}

/// Is `color`'s king attacked? A side without a king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_sq(color) {
        Some(ksq) => is_attacked(board, ksq, color),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
