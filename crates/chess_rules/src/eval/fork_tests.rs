use super::*;
use crate::board::Board;
use crate::types::Color;

fn fork_scores(fen: &str) -> ColorScores {
    AbsoluteFork::default().evaluate(&Position::from_fen(fen).unwrap())
}

#[test]
fn test_start_position_has_no_forks() {
    let scores = AbsoluteFork::default().evaluate(&Position::startpos());
    assert_eq!(scores, ColorScores::default());
}

#[test]
fn test_knight_forks_king_and_rook() {
    // Knight on c2 hits the king on e1 and the rook on a1
    let scores = fork_scores("4k3/8/8/8/8/8/2n5/R3K3 w - - 0 1");
    assert_eq!(scores[Color::Black], 500);
    assert_eq!(scores[Color::White], 0);
}

#[test]
fn test_plain_check_is_not_a_fork() {
    let scores = fork_scores("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
    assert_eq!(scores, ColorScores::default());
}

#[test]
fn test_attacking_pieces_without_king_is_not_absolute() {
    // Knight on c7 hits both rooks but not the king
    let scores = fork_scores("r3r1k1/2N5/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(scores[Color::White], 0);
}

#[test]
fn test_last_fork_wins() {
    // Nf6 forks king and queen (900), Nc7 forks king and rook (500). The c7
    // knight comes later in square order and its score replaces the first.
    let scores = fork_scores("r3k3/2Nq4/5N2/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(scores[Color::White], 500);
    assert_eq!(scores[Color::Black], 0);
}

#[test]
fn test_custom_values() {
    let values = PieceValues {
        rook: 5,
        ..PieceValues::default()
    };
    let pos = Position::from_fen("4k3/8/8/8/8/8/2n5/R3K3 w - - 0 1").unwrap();
    assert_eq!(AbsoluteFork::new(values).evaluate(&pos).black, 5);
}

#[test]
fn test_fools_mate_differs_from_start() {
    let baseline = AbsoluteFork::default().evaluate(&Position::startpos());

    let mut board = Board::new();
    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        board.play(m).unwrap();
    }
    assert!(board.is_mate());

    // Qh4 hits the king on e1 and the pawns on g4 and h2
    let scores = AbsoluteFork::default().evaluate(board.position());
    assert_ne!(scores, baseline);
    assert_eq!(scores.black, 200);
    assert_eq!(scores.white, 0);
}
