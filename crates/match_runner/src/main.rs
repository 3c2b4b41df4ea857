//! Match runner CLI
//!
//! Plays random-mover matches through the rule engine and reloads saved games.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chess_core::{Game, GameState, Snapshot};
use clap::{Parser, Subcommand};
use match_runner::{MatchConfig, MatchRunner};
use random_engine::RandomEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "match_runner", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a match between two random movers.
    Play {
        /// TOML file with match settings; flags below override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of games to play.
        #[arg(short, long)]
        games: Option<u32>,

        /// Plies after which a game is scored as a draw.
        #[arg(short, long)]
        max_moves: Option<u32>,

        /// Seed for reproducible games.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory for the match record and one snapshot per game.
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },

    /// Load a saved game snapshot, check its history and print the position.
    Replay {
        /// Snapshot JSON written by `play --save-dir`.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Play {
            config,
            games,
            max_moves,
            seed,
            save_dir,
        } => {
            let mut config = match config {
                Some(path) => MatchConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => MatchConfig::default(),
            };
            if let Some(n) = games {
                config.num_games = n;
            }
            if let Some(n) = max_moves {
                config.max_moves = n;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.validate()?;
            play(config, save_dir.as_deref())
        }
        Command::Replay { path } => replay(&path),
    }
}

fn play(config: MatchConfig, save_dir: Option<&Path>) -> Result<()> {
    let (mut engine1, mut engine2) = match config.seed {
        Some(seed) => (
            RandomEngine::seeded(seed),
            RandomEngine::seeded(seed.wrapping_add(1)),
        ),
        None => (
            RandomEngine::new().with_name("Random v1.0 #1"),
            RandomEngine::new().with_name("Random v1.0 #2"),
        ),
    };

    info!(
        games = config.num_games,
        max_moves = config.max_moves,
        seed = ?config.seed,
        "starting match"
    );
    let record = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);
    println!("{}", record.generate_report());

    if let Some(dir) = save_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let path = dir.join("match.json");
        record
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        for (i, game) in record.games.iter().enumerate() {
            let path = dir.join(format!("game_{:03}.json", i + 1));
            game.final_snapshot
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        info!(dir = %dir.display(), games = record.games.len(), "saved match");
    }
    Ok(())
}

fn replay(path: &Path) -> Result<()> {
    let snapshot =
        Snapshot::load(path).with_context(|| format!("loading snapshot {}", path.display()))?;

    let game = match snapshot.verify_history() {
        Ok(game) => game,
        Err(e) => {
            warn!(error = %e, "history does not reproduce the saved position; using the saved pieces");
            Game::from_snapshot(snapshot).context("rebuilding game from snapshot")?
        }
    };

    println!("{}", game.board());
    println!("Moves played: {}", game.history().len());
    match game.state() {
        GameState::Ongoing => {
            let side = game.side_to_move();
            let check = if game.is_in_check(side) { " (in check)" } else { "" };
            println!("{side} to move{check}, {} legal moves", game.legal_moves().len());
        }
        GameState::Checkmate(winner) => println!("Checkmate, {winner} wins"),
        GameState::Stalemate => println!("Stalemate"),
    }
    Ok(())
}
