//! Error types returned by the engine.
//!
//! Rejected moves are ordinary values, not panics: callers inspect the
//! `Result` from [`Game::make_move`](crate::Game::make_move) and carry on.

use thiserror::Error;

use crate::game::GameState;
use crate::types::{Color, Square};

/// Why a move was not applied. The game is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPieceAtOrigin(Square),
    #[error("it is {expected}'s turn, the piece on the origin square is {found}")]
    WrongSideToMove { expected: Color, found: Color },
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    #[error("the game is over ({0:?})")]
    GameOver(GameState),
}

/// A board that breaks the grid/piece invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("piece in cell {cell} believes it stands on {recorded}")]
    Misplaced { cell: Square, recorded: Square },
    #[error("{0} has more than one king")]
    TooManyKings(Color),
    #[error("two pieces claim {0}")]
    Occupied(Square),
}

/// Failure to parse a FEN position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN needs at least a placement and a side to move")]
    MissingFields,
    #[error("expected 8 ranks in placement, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    FileCount { rank: usize },
    #[error("invalid piece character {0:?}")]
    PieceChar(char),
    #[error("invalid side to move {0:?}")]
    SideToMove(String),
    #[error("invalid castling character {0:?}")]
    CastlingChar(char),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Failure to save, load or rebuild a game snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot describes an invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("move {index} of the recorded history does not replay: {source}")]
    Replay {
        index: usize,
        #[source]
        source: MoveError,
    },
    #[error("replaying the history does not reproduce the saved position")]
    HistoryMismatch,
}
