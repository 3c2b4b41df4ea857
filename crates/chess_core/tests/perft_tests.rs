use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Game, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 10_000;

/// Reference node counts. Only depths that involve neither en passant nor
/// promotion are listed, since neither rule is modelled.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        &[(1, 48)],
    ),
    ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -", &[(1, 14), (2, 191)]),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6)],
    ),
];

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let game = Game::from_fen(fen).unwrap_or_else(|e| panic!("bad FEN '{fen}': {e}"));
        let case_start = Instant::now();
        let mut ran_depths = Vec::new();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for case {} (expected {} nodes); set {}=1 to run all.",
                    depth,
                    idx + 1,
                    expected,
                    FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(&game, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for FEN '{fen}' at depth {depth}"
            );
            ran_depths.push(depth);
        }

        println!(
            "Case {:03} done: depths {:?}, elapsed {:.3?}",
            idx + 1,
            ran_depths,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Game::new(), 0), 1);
}
