use super::*;
use chess_core::{Move, Snapshot, Square};
use random_engine::RandomEngine;

/// Plays a fixed list of moves, then nothing.
struct ScriptedEngine {
    name: &'static str,
    script: Vec<Move>,
    next: usize,
}

impl ScriptedEngine {
    fn new(name: &'static str, script: &[((u8, u8), (u8, u8))]) -> Self {
        let script = script
            .iter()
            .map(|&(f, t)| Move::new(sq(f.0, f.1), sq(t.0, t.1)))
            .collect();
        Self {
            name,
            script,
            next: 0,
        }
    }
}

impl Engine for ScriptedEngine {
    fn select_move(&mut self, _game: &Game) -> Option<Move> {
        let mv = self.script.get(self.next).copied();
        self.next += 1;
        mv
    }

    fn name(&self) -> &str {
        self.name
    }

    fn new_game(&mut self) {
        self.next = 0;
    }
}

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn fools_mate() -> (ScriptedEngine, ScriptedEngine) {
    let white = ScriptedEngine::new("white", &[((1, 5), (2, 5)), ((1, 6), (3, 6))]);
    let black = ScriptedEngine::new("black", &[((6, 4), (4, 4)), ((7, 3), (3, 7))]);
    (white, black)
}

#[test]
fn test_checkmate_is_scored_for_the_mating_side() {
    let (mut white, mut black) = fools_mate();
    let runner = MatchRunner::new(MatchConfig::default());

    let record = runner.play_game(&mut white, &mut black);

    assert_eq!(record.termination, Termination::Checkmate);
    assert_eq!(record.result, GameResult::Loss);
    assert_eq!(record.final_state, GameState::Checkmate(Color::Black));
    assert_eq!(record.moves.len(), 4);
    assert_eq!(record.white, "white");
    assert_eq!(record.black, "black");
}

#[test]
fn test_final_snapshot_reloads_to_the_same_game() {
    let (mut white, mut black) = fools_mate();
    let runner = MatchRunner::new(MatchConfig::default());

    let record = runner.play_game(&mut white, &mut black);
    let json = record.final_snapshot.to_json().unwrap();
    let game = Snapshot::from_json(&json).unwrap().verify_history().unwrap();

    assert_eq!(game.state(), GameState::Checkmate(Color::Black));
    assert_eq!(game.history(), record.moves.as_slice());
}

#[test]
fn test_move_limit_is_a_draw() {
    let shuffle = |row: u8, to_row: u8| {
        ScriptedEngine::new(
            "shuffle",
            &[((row, 6), (to_row, 5)), ((to_row, 5), (row, 6)), ((row, 6), (to_row, 5))],
        )
    };
    let mut white = shuffle(0, 2);
    let mut black = shuffle(7, 5);
    let config = MatchConfig {
        max_moves: 6,
        ..Default::default()
    };

    let record = MatchRunner::new(config).play_game(&mut white, &mut black);

    assert_eq!(record.termination, Termination::MoveLimit);
    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.moves.len(), 6);
    assert_eq!(record.final_state, GameState::Ongoing);
}

#[test]
fn test_illegal_move_forfeits() {
    // Knight tries to jump straight ahead
    let mut white = ScriptedEngine::new("cheat", &[((0, 1), (2, 1))]);
    let mut black = RandomEngine::seeded(3);
    let runner = MatchRunner::new(MatchConfig::default());

    let record = runner.play_game(&mut white, &mut black);

    assert_eq!(record.termination, Termination::Forfeit(Color::White));
    assert_eq!(record.result, GameResult::Loss);
    assert!(record.moves.is_empty());
}

#[test]
fn test_silent_engine_forfeits() {
    let mut white = RandomEngine::seeded(4);
    let mut black = ScriptedEngine::new("mute", &[]);
    let runner = MatchRunner::new(MatchConfig::default());

    let record = runner.play_game(&mut white, &mut black);

    assert_eq!(record.termination, Termination::Forfeit(Color::Black));
    assert_eq!(record.result, GameResult::Win);
    assert_eq!(record.moves.len(), 1);
}

#[test]
fn test_alternating_colors_flips_results() {
    let (mut white, mut black) = fools_mate();
    // In the second game the scripts play the wrong color's pieces, so the
    // side to move forfeits on its first move.
    let config = MatchConfig {
        num_games: 2,
        max_moves: 20,
        alternate_colors: true,
        seed: None,
    };

    let record = MatchRunner::new(config).run_match(&mut white, &mut black);

    assert_eq!(record.games.len(), 2);
    assert_eq!(record.result.total_games(), 2);
    assert_eq!(record.games[0].white, "white");
    assert_eq!(record.games[1].white, "black");
    assert_eq!(record.games[0].result, GameResult::Loss);
    assert_eq!(record.games[1].termination, Termination::Forfeit(Color::White));
    assert_eq!(record.result.losses, 1);
    assert_eq!(record.result.wins, 1);
}

#[test]
fn test_random_self_play() {
    let mut engine1 = RandomEngine::seeded(10);
    let mut engine2 = RandomEngine::seeded(11);
    let config = MatchConfig {
        num_games: 4,
        max_moves: 80,
        ..Default::default()
    };

    let record = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);

    assert_eq!(record.result.total_games(), 4);
    for game in &record.games {
        assert!(game.moves.len() <= 80);
        assert!(!matches!(game.termination, Termination::Forfeit(_)));
        assert_eq!(Game::replay(&game.moves).unwrap().state(), game.final_state);
    }
}

#[test]
fn test_seeded_match_plays_distinct_games() {
    let mut engine1 = RandomEngine::seeded(7);
    let mut engine2 = RandomEngine::seeded(8);
    let config = MatchConfig {
        num_games: 4,
        max_moves: 60,
        seed: Some(7),
        ..Default::default()
    };

    let record = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);

    assert_ne!(record.engine1, record.engine2);
    assert_ne!(record.games[0].moves, record.games[2].moves);
    assert_ne!(record.games[1].moves, record.games[3].moves);
}

#[test]
fn test_seeded_match_is_reproducible() {
    let run = || {
        let mut engine1 = RandomEngine::seeded(7);
        let mut engine2 = RandomEngine::seeded(8);
        let config = MatchConfig {
            num_games: 2,
            max_moves: 30,
            ..Default::default()
        };
        MatchRunner::new(config).run_match(&mut engine1, &mut engine2)
    };
    let (a, b) = (run(), run());
    for (x, y) in a.games.iter().zip(&b.games) {
        assert_eq!(x.moves, y.moves);
    }
}

#[test]
fn test_quick_match() {
    let mut engine1 = RandomEngine::seeded(20);
    let mut engine2 = RandomEngine::seeded(21);

    let result = quick_match(&mut engine1, &mut engine2, 2);

    assert_eq!(result.total_games(), 2);
    assert!((0.0..=1.0).contains(&result.score()));
}
