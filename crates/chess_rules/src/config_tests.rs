use super::*;
use crate::eval::Evaluation;
use crate::position::Position;

#[test]
fn test_empty_config_is_default() {
    let config = EvalConfig::from_toml_str("").unwrap();
    assert_eq!(config, EvalConfig::default());
    assert_eq!(config.piece_values.queen, 900);
}

#[test]
fn test_partial_piece_values() {
    let config = EvalConfig::from_toml_str(
        r#"
        [piece_values]
        knight = 300
        rook = 510
        "#,
    )
    .unwrap();
    assert_eq!(config.piece_values.knight, 300);
    assert_eq!(config.piece_values.rook, 510);
    assert_eq!(config.piece_values.pawn, 100);

    let pos = Position::from_fen("4k3/8/8/8/8/8/2n5/R3K3 w - - 0 1").unwrap();
    assert_eq!(config.absolute_fork().evaluate(&pos).black, 510);
    assert_eq!(config.material().evaluate(&pos).white, 510);
}

#[test]
fn test_invalid_toml() {
    let err = EvalConfig::from_toml_str("[piece_values]\npawn = \"lots\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file() {
    let err = EvalConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
