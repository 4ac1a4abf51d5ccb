//! Chess rules core.
//!
//! Keeps a legal position move by move: which moves are legal for the side to
//! move, whether a king is in check or mated, when castling is allowed, and
//! which tactical features (absolute forks) a position contains.
//!
//! [`Board`] is the entry point for playing a game. [`Position`] is the
//! snapshot value underneath it, and the free functions in [`attacks`],
//! [`movegen`] and [`castle`] work on positions directly.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod castle;
pub mod config;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod types;
pub mod zobrist;

pub use attacks::{attacked_squares, is_square_attacked, piece_attacks};
pub use bitboard::Bitboard;
pub use board::{Board, HistoryEntry};
pub use castle::{CastleSide, CastlingRecord, can_castle, can_castle_long, can_castle_short};
pub use config::EvalConfig;
pub use error::{ConfigError, FenError, MoveError, SquareError};
pub use eval::{AbsoluteFork, ColorScores, Evaluation, Material, PieceValues};
pub use movegen::{legal_moves, legal_moves_from, legal_moves_into};
pub use perft::{divide, perft};
pub use position::{PlacedPiece, Position, START_FEN};
pub use types::*;
pub use zobrist::ZOBRIST;
