use super::*;
use crate::game::Game;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn lone(color: Color, kind: PieceKind, at: (u8, u8)) -> (Board, Piece) {
    let pc = Piece::new(color, kind, sq(at.0, at.1));
    (Board::from_pieces([pc]).unwrap(), pc)
}

#[test]
fn test_knight_attacks() {
    // Knight in the centre covers 8 squares, in a corner only 2.
    let (b, n) = lone(Color::White, PieceKind::Knight, (3, 4));
    assert_eq!(attacked_squares(&b, &n).len(), 8);

    let (b, n) = lone(Color::White, PieceKind::Knight, (0, 0));
    let attacks = attacked_squares(&b, &n);
    assert_eq!(attacks.len(), 2);
    assert!(attacks.contains(&sq(1, 2)));
    assert!(attacks.contains(&sq(2, 1)));
}

#[test]
fn test_king_attacks() {
    let (b, k) = lone(Color::Black, PieceKind::KING, (3, 4));
    assert_eq!(attacked_squares(&b, &k).len(), 8);

    let (b, k) = lone(Color::Black, PieceKind::KING, (0, 0));
    assert_eq!(attacked_squares(&b, &k).len(), 3);
}

#[test]
fn test_pawn_attacks_diagonals_only() {
    let (b, p) = lone(Color::White, PieceKind::Pawn, (3, 4));
    let attacks = attacked_squares(&b, &p);
    assert_eq!(attacks, vec![sq(4, 3), sq(4, 5)]);

    // Edge pawn, and black attacks downwards.
    let (b, p) = lone(Color::Black, PieceKind::Pawn, (6, 0));
    assert_eq!(attacked_squares(&b, &p), vec![sq(5, 1)]);

    // The square in front is not attacked even though the pawn could move there.
    let (b, _) = lone(Color::White, PieceKind::Pawn, (1, 4));
    assert!(!is_attacked(&b, sq(2, 4), Color::Black));
    assert!(is_attacked(&b, sq(2, 5), Color::Black));
}

#[test]
fn test_slider_attacks_empty_board() {
    let (b, r) = lone(Color::White, PieceKind::ROOK, (3, 4));
    assert_eq!(attacked_squares(&b, &r).len(), 14);

    let (b, bishop) = lone(Color::White, PieceKind::Bishop, (3, 4));
    assert_eq!(attacked_squares(&b, &bishop).len(), 13);

    let (b, q) = lone(Color::White, PieceKind::Queen, (3, 4));
    assert_eq!(attacked_squares(&b, &q).len(), 27);
}

#[test]
fn test_rook_attacks_with_blockers() {
    let rook = Piece::new(Color::White, PieceKind::ROOK, sq(0, 0));
    let blocker = Piece::new(Color::Black, PieceKind::Pawn, sq(3, 0));
    let b = Board::from_pieces([rook, blocker]).unwrap();

    let attacks = attacked_squares(&b, &rook);
    assert!(attacks.contains(&sq(1, 0)));
    assert!(attacks.contains(&sq(2, 0)));
    assert!(attacks.contains(&sq(3, 0))); // can capture
    assert!(!attacks.contains(&sq(4, 0))); // blocked
    assert!(attacks.contains(&sq(0, 7)));
}

#[test]
fn test_defender_pieces_never_attack() {
    let b = Board::startpos();
    // White's own pieces do not count against white.
    assert!(!is_attacked(&b, sq(2, 4), Color::White));
    // But black sees (2, 4) covered by white's pawns.
    assert!(is_attacked(&b, sq(2, 4), Color::Black));
    // Nothing reaches the middle rows at the start.
    for col in 0..8 {
        assert!(!is_attacked(&b, sq(3, col), Color::White));
        assert!(!is_attacked(&b, sq(4, col), Color::Black));
    }
}

#[test]
fn test_piece_on_target_is_not_its_own_attacker() {
    let (b, _) = lone(Color::Black, PieceKind::Queen, (4, 4));
    assert!(!is_attacked(&b, sq(4, 4), Color::White));
}

#[test]
fn test_in_check_without_king_is_false() {
    let (b, _) = lone(Color::Black, PieceKind::Queen, (4, 4));
    assert!(!in_check(&b, Color::White));
}

#[test]
fn test_in_check_detects_slider() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/r3K3 w - -").unwrap();
    assert!(in_check(game.board(), Color::White));
    assert!(!in_check(game.board(), Color::Black));
}

fn mirror_files(sq: Square) -> Square {
    Square::new(sq.row(), 7 - sq.col()).unwrap()
}

fn mirror_ranks(sq: Square) -> Square {
    Square::new(7 - sq.row(), sq.col()).unwrap()
}

const POSITIONS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    "4k3/8/2n5/5b2/3Q4/8/1p6/4K2R w K -",
];

#[test]
fn test_attacks_invariant_under_file_mirror() {
    for fen in POSITIONS {
        let b = Game::from_fen(fen).unwrap().board().clone();
        let mirrored = Board::from_pieces(b.pieces().map(|pc| Piece {
            square: mirror_files(pc.square),
            ..pc
        }))
        .unwrap();

        for target in Square::all() {
            for color in [Color::White, Color::Black] {
                assert_eq!(
                    is_attacked(&b, target, color),
                    is_attacked(&mirrored, mirror_files(target), color),
                    "{fen}: {target} for {color}"
                );
            }
        }
    }
}

#[test]
fn test_attacks_invariant_under_color_flip() {
    for fen in POSITIONS {
        let b = Game::from_fen(fen).unwrap().board().clone();
        let flipped = Board::from_pieces(b.pieces().map(|pc| Piece {
            color: pc.color.other(),
            square: mirror_ranks(pc.square),
            ..pc
        }))
        .unwrap();

        for target in Square::all() {
            for color in [Color::White, Color::Black] {
                assert_eq!(
                    is_attacked(&b, target, color),
                    is_attacked(&flipped, mirror_ranks(target), color.other()),
                    "{fen}: {target} for {color}"
                );
            }
        }
    }
}
