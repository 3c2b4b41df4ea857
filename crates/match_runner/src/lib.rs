//! Match Runner for chess_core
//!
//! This crate provides infrastructure for:
//! - Playing engine-vs-engine games where every move is checked by the rules
//! - Tallying wins, losses and draws over a match
//! - Saving match records and final positions as JSON
//!
//! # Usage
//!
//! ```bash
//! # Ten seeded games between two random movers, final positions saved
//! cargo run -p match_runner -- play --games 10 --seed 7 --save-dir out/
//!
//! # Reload and check a saved game
//! cargo run -p match_runner -- replay out/game_001.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
