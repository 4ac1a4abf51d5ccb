use super::*;
use crate::types::PieceKind;

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();
    for key in ZOBRIST.keys {
        assert!(seen.insert(key), "duplicate key {key:#x}");
    }
    assert_eq!(seen.len(), KEY_COUNT);
}

#[test]
fn test_transpositions_share_identity() {
    use crate::types::{Move, MoveKind};

    let knight = |color, from: &str, to: &str| {
        Move::new(
            Piece::new(color, PieceKind::Knight),
            from.parse().unwrap(),
            to.parse().unwrap(),
            MoveKind::Normal,
        )
    };
    let nf3 = knight(Color::White, "g1", "f3");
    let nc3 = knight(Color::White, "b1", "c3");
    let nf6 = knight(Color::Black, "g8", "f6");

    let start = Position::startpos();
    let a = start.play(&nf3).play(&nf6).play(&nc3);
    let b = start.play(&nc3).play(&nf6).play(&nf3);
    assert_eq!(a.zobrist(), b.zobrist());
    assert_ne!(a.zobrist(), start.zobrist());
}

#[test]
fn test_identity_tracks_side_and_rights() {
    let start = Position::startpos();
    let mut black_to_move = start.clone();
    black_to_move.set_side_to_move(Color::Black);
    assert_ne!(start.zobrist(), black_to_move.zobrist());

    let no_rights =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
    assert_ne!(start.zobrist(), no_rights.zobrist());

    // Counters are not part of the identity
    let later =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 12 40").unwrap();
    assert_eq!(start.zobrist(), later.zobrist());
    assert_eq!(start.zobrist(), ZOBRIST.position_key(&start));
}

#[test]
fn test_zobrist_piece_key() {
    let piece = Piece::new(Color::White, PieceKind::Pawn);
    assert_ne!(
        ZOBRIST.piece_key(piece, Square::A1),
        ZOBRIST.piece_key(piece, Square::B1)
    );
}

#[test]
fn test_en_passant_file_only_counts_when_capturable() {
    // After 1.e4 no black pawn can take on e3
    let with_target =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
    let without =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_eq!(with_target.zobrist(), without.zobrist());

    // The e5 pawn can take d6
    let live = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let dead = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").unwrap();
    assert_ne!(live.zobrist(), dead.zobrist());
}
