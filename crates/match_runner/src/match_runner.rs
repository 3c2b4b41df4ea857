//! Plays games between two engines through the rule engine

use chess_core::{Color, Engine, Game, GameState};
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::results::{GameRecord, GameResult, MatchRecord, MatchResult, Termination};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// The tally in the returned record is from engine1's perspective.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchRecord {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };

            let game_result = if engine1_white {
                record.result
            } else {
                record.result.flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1_color = if engine1_white { "W" } else { "B" },
                outcome = ?game_result,
                ending = ?record.termination,
                plies = record.moves.len(),
                "Score: {}-{}-{}",
                result.wins,
                result.losses,
                result.draws
            );
            games.push(record);
        }

        MatchRecord {
            engine1: engine1.name().to_string(),
            engine2: engine2.name().to_string(),
            config: self.config.clone(),
            result,
            games,
        }
    }

    /// Play a single game from the starting position
    ///
    /// The record's result is from white's perspective. Every move goes
    /// through [`Game::make_move`], so an engine that answers with a move the
    /// rules reject forfeits the game.
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut game = Game::new();
        white.new_game();
        black.new_game();

        let termination = loop {
            match game.state() {
                GameState::Checkmate(_) => break Termination::Checkmate,
                GameState::Stalemate => break Termination::Stalemate,
                GameState::Ongoing => {}
            }
            if game.history().len() >= self.config.max_moves as usize {
                break Termination::MoveLimit;
            }

            let side = game.side_to_move();
            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let Some(mv) = engine.select_move(&game) else {
                warn!(engine = engine.name(), %side, "no move offered in an ongoing game");
                break Termination::Forfeit(side);
            };
            debug!(ply = game.history().len() + 1, %side, %mv, "move");

            if let Err(e) = game.make_move(mv.from, mv.to) {
                warn!(engine = engine.name(), %mv, error = %e, "move rejected");
                break Termination::Forfeit(side);
            }
        };

        let result = match termination {
            Termination::Checkmate => match game.state() {
                GameState::Checkmate(Color::White) => GameResult::Win,
                _ => GameResult::Loss,
            },
            Termination::Stalemate | Termination::MoveLimit => GameResult::Draw,
            Termination::Forfeit(Color::White) => GameResult::Loss,
            Termination::Forfeit(Color::Black) => GameResult::Win,
        };

        GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            result,
            termination,
            moves: game.history().to_vec(),
            final_state: game.state(),
            final_snapshot: game.snapshot(),
        }
    }
}

/// Quick match helper: play `num_games` with default settings otherwise
pub fn quick_match(engine1: &mut dyn Engine, engine2: &mut dyn Engine, num_games: u32) -> MatchResult {
    let config = MatchConfig {
        num_games,
        ..MatchConfig::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2).result
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
