//! Error types for the rules core.
//!
//! Missing kings or doubly occupied squares are not represented here: they
//! mean the position was corrupted and are reported by panicking.

use thiserror::Error;

use crate::types::{Color, Move, Square};

/// A square label that is not one of `a1`..`h8`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("invalid square label {0:?}")]
    Invalid(String),
}

/// Reasons a move is refused by [`crate::Board::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },
    #[error("it is {expected:?}'s turn, got a move for {got:?}")]
    NotYourTurn { expected: Color, got: Color },
    #[error("no piece on {0}")]
    NoPieceAt(Square),
    #[error("no legal move matches {0:?}")]
    NoSuchMove(String),
    #[error(transparent)]
    Square(#[from] SquareError),
}

/// Problems found while parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: u8 },
    #[error("invalid piece character {0:?}")]
    PieceChar(char),
    #[error("invalid side to move {0:?}")]
    SideToMove(String),
    #[error("invalid castling character {0:?}")]
    CastlingChar(char),
    #[error("invalid en passant square {0:?}")]
    EnPassant(String),
    #[error("invalid move counter {0:?}")]
    Counter(String),
    #[error("expected exactly one {0:?} king")]
    KingCount(Color),
    #[error("{0:?} is in check but it is not their move")]
    OpponentInCheck(Color),
}

/// Failure loading an evaluation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
