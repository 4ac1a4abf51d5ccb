use super::*;

#[test]
fn test_square_labels() {
    assert_eq!(Square::A1.to_string(), "a1");
    assert_eq!(Square::H8.to_string(), "h8");
    assert_eq!("e1".parse::<Square>().unwrap(), Square::E1);
    assert_eq!("g8".parse::<Square>().unwrap(), Square::G8);

    // Every index maps to a label that parses back to itself
    for sq in Square::all() {
        assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
    }
}

#[test]
fn test_invalid_square_labels_are_rejected() {
    for bad in ["", "e", "i1", "a0", "a9", "E1", "e10", "1e"] {
        assert_eq!(
            bad.parse::<Square>(),
            Err(SquareError::Invalid(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_square_geometry() {
    let e4: Square = "e4".parse().unwrap();
    assert_eq!(e4.file(), 4);
    assert_eq!(e4.rank(), 3);
    assert_eq!(e4.offset(1, 1), Some("f5".parse().unwrap()));
    assert_eq!(Square::H1.offset(1, 0), None);
    assert_eq!(Square::A1.offset(0, -1), None);
}

#[test]
fn test_color_opposite_is_involutive() {
    for c in Color::ALL {
        assert_ne!(c.opposite(), c);
        assert_eq!(c.opposite().opposite(), c);
    }
}

#[test]
fn test_fen_chars() {
    let wq = Piece::new(Color::White, PieceKind::Queen);
    assert_eq!(wq.fen_char(), 'Q');
    assert_eq!(Piece::from_fen_char('n'), Some(Piece::new(Color::Black, PieceKind::Knight)));
    assert_eq!(Piece::from_fen_char('x'), None);
}

#[test]
fn test_move_display() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let mv = Move::new(pawn, "e7".parse().unwrap(), "e8".parse().unwrap(), MoveKind::Normal)
        .with_promotion(PieceKind::Queen);
    assert_eq!(mv.to_string(), "e7e8q");
    assert!(!mv.is_capture());
}
