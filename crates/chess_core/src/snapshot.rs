//! Serializable game state for persistence.
//!
//! A snapshot carries every piece with its has-moved flag, the side to move
//! and the move history. Dropping the flags would silently give castling
//! rights back, so they round-trip exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Board;
use crate::error::SnapshotError;
use crate::game::{Game, GameState};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pieces: Vec<Piece>,
    pub side_to_move: Color,
    pub history: Vec<Move>,
    /// Informational; recomputed from the position on load.
    #[serde(default)]
    pub state: GameState,
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pieces: self.board().pieces().collect(),
            side_to_move: self.side_to_move(),
            history: self.history().to_vec(),
            state: self.state(),
        }
    }

    /// Rebuild a game from a snapshot, validating the board.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Game, SnapshotError> {
        let board = Board::from_pieces(snapshot.pieces)?;
        let game = Game::from_board(board, snapshot.side_to_move, snapshot.history);
        if game.state() != snapshot.state {
            warn!(
                saved = ?snapshot.state,
                computed = ?game.state(),
                "snapshot state disagrees with its position; using the computed one"
            );
        }
        Ok(game)
    }
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the snapshot to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Replay the recorded history from the starting position and check that
    /// it reproduces this snapshot's position.
    ///
    /// Only meaningful for games that began from the standard setup.
    pub fn verify_history(&self) -> Result<Game, SnapshotError> {
        let replayed = Game::replay(&self.history)?;
        let mut saved = self.pieces.clone();
        let mut rebuilt: Vec<Piece> = replayed.board().pieces().collect();
        saved.sort_by_key(|pc| pc.square);
        rebuilt.sort_by_key(|pc| pc.square);
        if saved != rebuilt || replayed.side_to_move() != self.side_to_move {
            return Err(SnapshotError::HistoryMismatch);
        }
        Ok(replayed)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
