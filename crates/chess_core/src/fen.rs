//! Position setup from Forsyth-Edwards Notation.
//!
//! Only the placement, side-to-move and castling fields matter here. The
//! en-passant and clock fields are accepted and ignored since neither rule
//! is modelled.

use crate::board::Board;
use crate::error::FenError;
use crate::game::Game;
use crate::types::*;

impl Game {
    /// Set up a game from FEN. The resulting state is classified right away.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::MissingFields);
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };
        let rights = CastlingRights::parse(parts.get(2).copied().unwrap_or("-"))?;
        let board = parse_placement(parts[0], &rights)?;

        Ok(Game::from_board(board, side_to_move, Vec::new()))
    }
}

#[derive(Default)]
struct CastlingRights {
    wk: bool,
    wq: bool,
    bk: bool,
    bq: bool,
}

impl CastlingRights {
    fn parse(field: &str) -> Result<Self, FenError> {
        let mut rights = CastlingRights::default();
        if field == "-" {
            return Ok(rights);
        }
        for c in field.chars() {
            match c {
                'K' => rights.wk = true,
                'Q' => rights.wq = true,
                'k' => rights.bk = true,
                'q' => rights.bq = true,
                _ => return Err(FenError::CastlingChar(c)),
            }
        }
        Ok(rights)
    }

    /// (kingside, queenside) for `color`.
    fn sides(&self, color: Color) -> (bool, bool) {
        match color {
            Color::White => (self.wk, self.wq),
            Color::Black => (self.bk, self.bq),
        }
    }

    /// Has-moved flag implied for a rook or king standing on `sq`.
    fn has_moved(&self, color: Color, kind: PieceKind, sq: Square) -> bool {
        let (kingside, queenside) = self.sides(color);
        if sq.row() != color.home_row() {
            return true;
        }
        match kind {
            PieceKind::King { .. } => !(sq.col() == 4 && (kingside || queenside)),
            PieceKind::Rook { .. } => match sq.col() {
                7 => !kingside,
                0 => !queenside,
                _ => true,
            },
            _ => true,
        }
    }
}

fn parse_placement(placement: &str, rights: &CastlingRights) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        // FEN lists row 7 first.
        let row = 7 - rank_idx as u8;
        let mut col: u8 = 0;
        for ch in rank_str.chars() {
            if ch.is_ascii_digit() {
                let run = match ch {
                    '1'..='8' => ch as u8 - b'0',
                    _ => return Err(FenError::FileCount { rank: rank_idx }),
                };
                col = col
                    .checked_add(run)
                    .filter(|&c| c <= 8)
                    .ok_or(FenError::FileCount { rank: rank_idx })?;
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::ROOK,
                'q' => PieceKind::Queen,
                'k' => PieceKind::KING,
                _ => return Err(FenError::PieceChar(ch)),
            };
            let sq = Square::new(row, col).ok_or(FenError::FileCount { rank: rank_idx })?;
            let kind = if rights.has_moved(color, kind, sq) {
                kind.moved()
            } else {
                kind
            };
            board.place(Piece::new(color, kind, sq))?;
            col += 1;
        }
        if col != 8 {
            return Err(FenError::FileCount { rank: rank_idx });
        }
    }
    Ok(board)
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
