use crate::game::Game;

/// Pure perft node count.
/// Counts all legal move sequences of length `depth` from the given game,
/// going through `make_move` so the whole rule pipeline is exercised.
pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = game.clone();
        if child.make_move(mv.from, mv.to).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}
