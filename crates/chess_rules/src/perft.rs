use crate::{movegen::legal_moves_into, position::Position, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    fn inner(pos: &Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            nodes += inner(&pos.play(mv), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Node count below each root move, for tracking down a perft mismatch.
pub fn divide(pos: &Position, depth: u8) -> Vec<(Move, u64)> {
    let mut roots = Vec::new();
    legal_moves_into(pos, &mut roots);
    roots
        .into_iter()
        .map(|mv| {
            let nodes = if depth <= 1 {
                1
            } else {
                perft(&pos.play(&mv), depth - 1)
            };
            (mv, nodes)
        })
        .collect()
}
