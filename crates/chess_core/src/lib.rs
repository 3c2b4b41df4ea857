pub mod attacks;
pub mod board;
pub mod error;
pub mod fen;
pub mod game;
pub mod geometry;
pub mod legality;
pub mod perft;
pub mod snapshot;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::{attacked_squares, attacks_square, in_check, is_attacked};
pub use board::*;
pub use error::*;
pub use game::*;
pub use geometry::{geometric_validity, path_clear};
pub use legality::{has_legal_move, is_legal, legal_destinations, legal_moves};
pub use perft::perft;
pub use snapshot::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by move-selection strategies
// =============================================================================

/// Trait that all opponent strategies implement.
///
/// An engine sees the game only through its public queries; it picks one of
/// [`Game::legal_moves`] and the caller plays it with [`Game::make_move`].
pub trait Engine: Send {
    /// Choose a move for the side to move, or `None` when there is none.
    fn select_move(&mut self, game: &Game) -> Option<Move>;

    /// Returns the engine's name for logs and match records
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
