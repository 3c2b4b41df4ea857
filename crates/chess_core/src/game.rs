//! Turn controller: the only place a move is committed to the board.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attacks;
use crate::board::Board;
use crate::error::{MoveError, SnapshotError};
use crate::legality;
use crate::types::*;

/// Where the game stands after the last move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Ongoing,
    /// The side that delivered mate.
    Checkmate(Color),
    Stalemate,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            side_to_move: Color::White,
            history: Vec::new(),
            state: GameState::Ongoing,
        }
    }

    /// Continue from an arbitrary board. The state is classified immediately,
    /// so a position that is already mate or stalemate comes back terminal.
    pub fn from_board(board: Board, side_to_move: Color, history: Vec<Move>) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            history,
            state: GameState::Ongoing,
        };
        game.state = game.classify();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn get_occupant(&self, sq: Square) -> Option<Piece> {
        self.board.get_occupant(sq)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        attacks::in_check(&self.board, color)
    }

    /// Would moving the piece on `from` to `to` be legal right now, ignoring
    /// whose turn it is?
    pub fn is_legal(&mut self, from: Square, to: Square) -> bool {
        legality::is_legal(&mut self.board, from, to)
    }

    /// Legal destinations of the piece on `from`. Empty for an empty square.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        legality::legal_destinations(&mut self.board, from)
    }

    /// Every legal move for the side to move. Empty once the game is over.
    ///
    /// Takes `&self` for callers holding a shared reference (engines); the
    /// board is cloned once and the simulations run on the copy.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.state.is_over() {
            return Vec::new();
        }
        let mut tmp = self.board.clone();
        legality::legal_moves(&mut tmp, self.side_to_move)
    }

    /// Like [`Game::legal_moves`], simulating in place and reusing `out`.
    pub fn legal_moves_into(&mut self, out: &mut Vec<Move>) {
        out.clear();
        if self.state.is_over() {
            return;
        }
        out.extend(legality::legal_moves(&mut self.board, self.side_to_move));
    }

    /// Apply a move for the side to move.
    ///
    /// On success returns the new game state; on failure nothing changes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<GameState, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver(self.state));
        }
        let piece = self
            .board
            .get_occupant(from)
            .ok_or(MoveError::NoPieceAtOrigin(from))?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSideToMove {
                expected: self.side_to_move,
                found: piece.color,
            });
        }
        if !legality::is_legal(&mut self.board, from, to) {
            debug!(%from, %to, "rejected illegal move");
            return Err(MoveError::IllegalMove { from, to });
        }

        self.commit(piece, from, to);
        self.history.push(Move::new(from, to));
        self.side_to_move = self.side_to_move.other();
        self.state = self.classify();

        debug!(%from, %to, state = ?self.state, "applied move");
        Ok(self.state)
    }

    fn commit(&mut self, piece: Piece, from: Square, to: Square) {
        let captured = self.board.relocate(from, to);
        if let Some(pc) = captured {
            debug!(captured = ?pc.kind, on = %to, "capture");
        }
        if piece.kind.is_king()
            && let Some((rook_from, rook_to)) = castling_rook_squares(from, to)
        {
            self.board.relocate(rook_from, rook_to);
            mark_moved(&mut self.board, rook_to);
        }
        mark_moved(&mut self.board, to);

        debug_assert!(self.board.validate().is_ok(), "board invariant broken");
    }

    /// Classify the position for the side to move.
    fn classify(&mut self) -> GameState {
        let color = self.side_to_move;
        for side in [color, color.other()] {
            if self.board.king_sq(side).is_none() {
                warn!(color = %side, "no king on the board; its side is never in check");
            }
        }
        if legality::has_legal_move(&mut self.board, color) {
            return GameState::Ongoing;
        }
        if attacks::in_check(&self.board, color) {
            GameState::Checkmate(color.other())
        } else {
            GameState::Stalemate
        }
    }

    /// Rebuild a game from the starting position by replaying `moves`.
    pub fn replay(moves: &[Move]) -> Result<Game, SnapshotError> {
        let mut game = Game::new();
        for (index, mv) in moves.iter().enumerate() {
            game.make_move(mv.from, mv.to)
                .map_err(|source| SnapshotError::Replay { index, source })?;
        }
        Ok(game)
    }
}

fn mark_moved(board: &mut Board, sq: Square) {
    if let Some(mut pc) = board.get_occupant(sq) {
        pc.kind = pc.kind.moved();
        board.set_cell(sq, Some(pc));
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
