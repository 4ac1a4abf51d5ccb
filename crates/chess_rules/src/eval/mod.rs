//! Position evaluators that extract per-color features for downstream
//! scoring.
//!
//! Every evaluator returns a [`ColorScores`]; blending several of them into
//! one number is left to the caller.

pub mod fork;
pub mod material;

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Color, PieceKind};

pub use fork::AbsoluteFork;
pub use material::Material;

/// Centipawn value of each piece kind. The king is priceless and scores 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 0,
        }
    }
}

impl PieceValues {
    pub fn of(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// One score per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScores {
    pub white: i32,
    pub black: i32,
}

impl ColorScores {
    pub fn set(&mut self, color: Color, value: i32) {
        match color {
            Color::White => self.white = value,
            Color::Black => self.black = value,
        }
    }

    pub fn add(&mut self, color: Color, value: i32) {
        match color {
            Color::White => self.white += value,
            Color::Black => self.black += value,
        }
    }
}

impl Index<Color> for ColorScores {
    type Output = i32;

    fn index(&self, color: Color) -> &i32 {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// A feature extractor over a single position.
pub trait Evaluation {
    /// Stable identifier, e.g. `"absolute_fork"`.
    fn name(&self) -> &'static str;

    fn evaluate(&self, pos: &Position) -> ColorScores;
}
