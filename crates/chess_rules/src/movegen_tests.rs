use super::*;

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

fn destinations(pos: &Position, from: &str) -> Vec<String> {
    let mut out: Vec<String> = legal_moves_from(pos, sq(from))
        .iter()
        .map(|m| m.to.to_string())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|m| m.color == Color::White));
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert!(moves.iter().any(|m| m.move_kind == MoveKind::CastleShort));
    assert!(moves.iter().any(|m| m.move_kind == MoveKind::CastleLong));
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    // Knight on e2 pinned by the rook on e8
    let pos = fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(legal_moves_from(&pos, sq("e2")).is_empty());

    // A pinned rook may still slide along the pin
    let pos = fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
    assert_eq!(
        destinations(&pos, "e2"),
        vec!["e3", "e4", "e5", "e6", "e7", "e8"]
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    // Black rook on d8 covers the d-file, pawn on f3 covers e2 and g2
    let pos = fen("3r2k1/8/8/8/8/5p2/8/4K3 w - - 0 1");
    assert_eq!(destinations(&pos, "e1"), vec!["f1", "f2"]);
}

#[test]
fn test_king_cannot_hide_behind_itself() {
    // Retreating along the checking ray is still check
    let pos = fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    let dests = destinations(&pos, "e1");
    assert!(!dests.contains(&"f1".to_string()));
    assert!(dests.contains(&"e2".to_string()));
}

#[test]
fn test_check_must_be_answered() {
    // Queen on e7 checks along the e-file: only blocks, captures or king moves
    let pos = fen("4k3/4q3/8/8/8/8/3B4/R3K3 w Q - 0 1");
    let moves = legal_moves(&pos);
    for mv in &moves {
        let next = pos.play(mv);
        assert!(!next.in_check(Color::White), "{mv} leaves the king in check");
    }
    // No castling out of check
    assert!(moves.iter().all(|m| !m.is_castle()));
    // Bd2-e3 blocks
    assert!(moves.iter().any(|m| m.from == sq("d2") && m.to == sq("e3")));
}

#[test]
fn test_castling_through_attacked_square_refused() {
    // Bishop on c4 covers f1
    let pos = fen("4k3/8/8/8/2b5/8/8/4K2R w K - 0 1");
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle()));
}

#[test]
fn test_castling_needs_empty_path() {
    let pos = fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle()));
}

#[test]
fn test_long_castling_refused_when_b_square_attacked() {
    // Knight on d7 covers b8; c8 and d8 stay quiet
    let pos = fen("r3k3/3N4/8/8/8/8/8/4K3 b q - 0 1");
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| m.move_kind != MoveKind::CastleLong));

    let pos = fen("r3k3/8/8/8/8/8/8/4K3 b q - 0 1");
    assert!(legal_moves(&pos).iter().any(|m| m.move_kind == MoveKind::CastleLong));
}

#[test]
fn test_en_passant_generated() {
    let pos = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let moves = legal_moves_from(&pos, sq("e5"));
    assert!(
        moves
            .iter()
            .any(|m| m.move_kind == MoveKind::EnPassant && m.to == sq("d6"))
    );
}

#[test]
fn test_en_passant_discovering_check_is_illegal() {
    // Taking en passant would clear the fifth rank between rook and king
    let pos = fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert!(
        legal_moves(&pos)
            .iter()
            .all(|m| m.move_kind != MoveKind::EnPassant)
    );
}

#[test]
fn test_promotions_expand_to_four() {
    let pos = fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let moves = legal_moves_from(&pos, sq("a7"));
    // a8 push and b8 capture, four pieces each
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|m| m.promotion.is_some()));
}

#[test]
fn test_opponent_piece_has_no_moves() {
    let pos = Position::startpos();
    assert!(legal_moves_from(&pos, sq("e7")).is_empty());
    assert!(legal_moves_from(&pos, sq("e4")).is_empty());
}

#[test]
fn test_is_legal_and_has_legal_move() {
    let pos = Position::startpos();
    let e4 = Move::new(
        Piece::new(Color::White, PieceKind::Pawn),
        sq("e2"),
        sq("e4"),
        MoveKind::Normal,
    );
    assert!(is_legal(&pos, &e4));
    let e5 = Move { to: sq("e5"), ..e4 };
    assert!(!is_legal(&pos, &e5));
    assert!(has_legal_move(&pos));

    // Stalemate
    let stale = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(!has_legal_move(&stale));
}
