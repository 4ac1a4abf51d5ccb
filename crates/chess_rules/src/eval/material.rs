use crate::eval::{ColorScores, Evaluation, PieceValues};
use crate::position::Position;

/// Sum of piece values per color.
#[derive(Clone, Debug, Default)]
pub struct Material {
    values: PieceValues,
}

impl Material {
    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }

    /// Material balance from the side-to-move perspective.
    pub fn balance(&self, pos: &Position) -> i32 {
        let scores = self.evaluate(pos);
        let side = pos.side_to_move();
        scores[side] - scores[side.opposite()]
    }
}

impl Evaluation for Material {
    fn name(&self) -> &'static str {
        "material"
    }

    fn evaluate(&self, pos: &Position) -> ColorScores {
        let mut scores = ColorScores::default();
        for pp in pos.placed_pieces() {
            scores.add(pp.color, self.values.of(pp.kind));
        }
        scores
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod material_tests;
