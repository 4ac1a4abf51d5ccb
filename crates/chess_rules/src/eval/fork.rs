//! Absolute fork detection.
//!
//! An absolute fork is a single piece attacking the enemy king and at least
//! one other enemy piece at the same time. For each color the score is the
//! summed value of the pieces attacked by its forking piece.
//!
//! Only one fork per color is kept. Pieces are visited in square order
//! (a1, b1, ..., h8) and a later fork overwrites an earlier one; the scores
//! are not accumulated.

use crate::attacks::piece_attacks;
use crate::eval::{ColorScores, Evaluation, PieceValues};
use crate::position::Position;
use crate::types::PieceKind;

#[derive(Clone, Debug, Default)]
pub struct AbsoluteFork {
    values: PieceValues,
}

impl AbsoluteFork {
    pub const NAME: &'static str = "absolute_fork";

    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl Evaluation for AbsoluteFork {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, pos: &Position) -> ColorScores {
        let mut scores = ColorScores::default();
        for attacker in pos.placed_pieces() {
            if attacker.kind == PieceKind::King {
                continue;
            }
            let targets =
                piece_attacks(pos, attacker.square) & pos.occupied_by(attacker.color.opposite());

            let mut king_attacked = false;
            let mut others = 0;
            let mut total = 0;
            for sq in targets {
                let Some(victim) = pos.piece_at(sq) else {
                    continue;
                };
                if victim.kind == PieceKind::King {
                    king_attacked = true;
                } else {
                    others += 1;
                }
                total += self.values.of(victim.kind);
            }

            if king_attacked && others > 0 {
                scores.set(attacker.color, total);
            }
        }
        scores
    }
}

#[cfg(test)]
#[path = "fork_tests.rs"]
mod fork_tests;
