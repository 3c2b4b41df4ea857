//! Full legality: movement rules plus king safety.
//!
//! King safety is decided by playing the move on the real board inside a
//! [`Simulation`] guard, asking the attack oracle about the mover's king and
//! letting the guard put everything back when it is dropped.

use std::ops::Deref;

use tracing::debug;

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::geometry::geometric_validity;
use crate::types::*;

/// A hypothetical move applied in place. Dropping it restores the board
/// exactly, including piece squares and the castling rook.
struct Simulation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<Piece>,
    displaced: Option<Piece>,
    rook: Option<(Square, Square, Piece)>,
}

impl<'a> Simulation<'a> {
    fn play(board: &'a mut Board, from: Square, to: Square) -> Self {
        let moved = board.get_occupant(from);
        let mut sim = Simulation {
            board,
            from,
            to,
            moved,
            displaced: None,
            rook: None,
        };
        sim.displaced = sim.board.relocate(from, to);

        if let Some(pc) = moved
            && pc.kind.is_king()
            && let Some((rook_from, rook_to)) = castling_rook_squares(from, to)
            && let Some(rook) = sim.board.get_occupant(rook_from)
            && rook.color == pc.color
            && rook.kind == PieceKind::ROOK
        {
            sim.board.relocate(rook_from, rook_to);
            sim.rook = Some((rook_from, rook_to, rook));
        }
        sim
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if let Some((rook_from, rook_to, rook)) = self.rook.take() {
            self.board.set_cell(rook_to, None);
            self.board.set_cell(rook_from, Some(rook));
        }
        self.board.set_cell(self.to, self.displaced.take());
        self.board.set_cell(self.from, self.moved.take());
    }
}

/// Is the move `from -> to` legal for whichever piece stands on `from`?
///
/// The board is borrowed mutably for the simulation but is identical to its
/// previous state when this returns.
pub fn is_legal(board: &mut Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get_occupant(from) else {
        return false;
    };
    if !geometric_validity(board, &piece, to) {
        return false;
    }
    if board.get_occupant(to).is_some_and(|pc| pc.kind.is_king()) {
        return false;
    }

    if piece.kind.is_king() && castling_rook_squares(from, to).is_some() {
        // The king may not castle out of check or across an attacked square.
        // Its destination is covered by the simulation below.
        let crossed = Square::new(from.row(), (from.col() + to.col()) / 2);
        if is_attacked(board, from, piece.color)
            || crossed.is_some_and(|sq| is_attacked(board, sq, piece.color))
        {
            return false;
        }
    }

    let sim = Simulation::play(board, from, to);
    match sim.king_sq(piece.color) {
        Some(ksq) => !is_attacked(&sim, ksq, piece.color),
        None => {
            debug!(color = %piece.color, "no king on the board; treating it as not in check");
            true
        }
    }
}

/// All destinations the piece on `from` may legally move to.
pub fn legal_destinations(board: &mut Board, from: Square) -> Vec<Square> {
    Square::all().filter(|&to| is_legal(board, from, to)).collect()
}

/// Every legal move for `color`, in board order.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let origins: Vec<Square> = board.pieces_of(color).map(|pc| pc.square).collect();
    let mut out = Vec::with_capacity(64);
    for from in origins {
        for to in Square::all() {
            if is_legal(board, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

/// Does `color` have at least one legal move? Exhaustive pieces x 64 scan.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let origins: Vec<Square> = board.pieces_of(color).map(|pc| pc.square).collect();
    origins
        .into_iter()
        .any(|from| Square::all().any(|to| is_legal(board, from, to)))
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
