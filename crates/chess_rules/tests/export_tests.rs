//! Shape of the serialized snapshots handed to presentation layers.

use serde_json::{Value, json};

use chess_rules::{Board, CastlingRecord, Color, Square};

#[test]
fn test_history_entry_json() {
    let mut board = Board::new();
    board.play("e2e4").unwrap();
    board.play("d7d5").unwrap();
    board.play("e4d5").unwrap();

    let entry = serde_json::to_value(&board.history()[2]).unwrap();
    assert_eq!(
        entry["move"],
        json!({
            "color": "White",
            "kind": "Pawn",
            "from": "e4",
            "to": "d5",
            "move_kind": "Capture",
            "promotion": null,
        })
    );
    assert_eq!(entry["color"], "White");
    assert_eq!(entry["captured"], json!({ "color": "Black", "kind": "Pawn" }));
    assert_eq!(entry["is_check"], false);
    assert_eq!(entry["position"], json!(board.position().zobrist()));
}

#[test]
fn test_placed_pieces_json() {
    let board = Board::new();
    let pieces = serde_json::to_value(board.pieces()).unwrap();
    let Value::Array(items) = pieces else {
        panic!("expected an array");
    };
    assert_eq!(items.len(), 32);
    assert!(items.contains(&json!({ "color": "White", "kind": "King", "square": "e1" })));
    assert!(items.contains(&json!({ "color": "Black", "kind": "Queen", "square": "d8" })));
}

#[test]
fn test_castling_record_json() {
    let value = serde_json::to_value(CastlingRecord::INITIAL).unwrap();
    assert_eq!(
        value,
        json!({ "is_castled": false, "short_available": true, "long_available": true })
    );

    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    board.play("e1g1").unwrap();
    let value = serde_json::to_value(board.castling(Color::White)).unwrap();
    assert_eq!(
        value,
        json!({ "is_castled": true, "short_available": false, "long_available": false })
    );
}

#[test]
fn test_square_json_round_trip_and_rejects() {
    let sq: Square = serde_json::from_str("\"h8\"").unwrap();
    assert_eq!(sq, Square::H8);
    assert_eq!(serde_json::to_string(&Square::A1).unwrap(), "\"a1\"");
    assert!(serde_json::from_str::<Square>("\"i9\"").is_err());
}
