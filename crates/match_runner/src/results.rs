//! Match results storage and reporting

use std::path::Path;

use chess_core::{Color, GameState, Move, Snapshot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MatchConfig;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to (de)serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a single game from one side's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How a game came to an end
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// The ply limit was reached
    MoveLimit,
    /// The side to move offered a move the rules rejected, or none at all
    Forfeit(Color),
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// From white's perspective
    pub result: GameResult,
    pub termination: Termination,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub final_snapshot: Snapshot,
}

/// Complete match output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchRecord {
    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, {} ply limit\n\n",
            self.config.num_games, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:<4} {:<16} {:<16} {:>6} {:<12} {:>5}\n",
            "#", "White", "Black", "Result", "Ending", "Plies"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let outcome = match game.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            let ending = match game.termination {
                Termination::Checkmate => "checkmate".to_string(),
                Termination::Stalemate => "stalemate".to_string(),
                Termination::MoveLimit => "move limit".to_string(),
                Termination::Forfeit(c) => format!("{c} forfeit"),
            };
            report.push_str(&format!(
                "{:<4} {:<16} {:<16} {:>6} {:<12} {:>5}\n",
                i + 1,
                game.white,
                game.black,
                outcome,
                ending,
                game.moves.len()
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}
