//! Random Move Opponent
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Exercising the rule engine over many unpredictable games
//! - A baseline opponent for the match runner

use chess_core::{Engine, Game, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// An opponent that plays random legal moves.
///
/// It has no evaluation at all; it only asks the game for its legal moves
/// and picks one.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    name: String,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random v1.0".to_string(),
        }
    }

    /// Reproducible sequence of choices. The generator keeps running across
    /// games, so every game of a seeded match is different.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: format!("Random v1.0 (seed {seed})"),
        }
    }

    /// Replace the name shown in logs and match records.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        let moves = game.legal_moves();
        let choice = moves.choose(&mut self.rng).copied();
        trace!(candidates = moves.len(), ?choice, "random move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
