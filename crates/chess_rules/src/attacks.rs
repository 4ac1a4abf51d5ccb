//! Attack squares: what each piece reaches given the current occupancy.
//!
//! This module contains:
//! - Knight, king and per-color pawn attack tables (built at compile time)
//! - Sliding attacks by walking rays until the first occupied square
//! - The per-color attacked-square set used for check and castling safety
//!
//! Attack squares are not move squares. A pawn attacks its two forward
//! diagonals whether or not anything stands there, and a square holding a
//! friendly piece is still attacked (defended).

use crate::bitboard::Bitboard;
use crate::position::Position;
use crate::types::{Color, Piece, PieceKind, Square};

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut idx = 0;
    while idx < 64 {
        let file = (idx % 8) as i8;
        let rank = (idx / 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            let (df, dr) = deltas[d];
            let f = file + df;
            let r = rank + dr;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r * 8 + f) as u32;
            }
            d += 1;
        }
        table[idx] = Bitboard(bits);
        idx += 1;
    }
    table
}

pub static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
pub static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);

/// Indexed by `[color.idx()][square]`.
pub static PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    leaper_table(&[(-1, 1), (1, 1)]),
    leaper_table(&[(-1, -1), (1, -1)]),
];

#[inline(always)]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.idx()][sq.index() as usize]
}

#[inline(always)]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

#[inline(always)]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

/// Walk each ray from `from`, stopping on (and including) the first occupied
/// square.
pub fn slider_attacks(from: Square, occupied: Bitboard, dirs: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(sq) = cur {
            attacks.insert(sq);
            if occupied.contains(sq) {
                break;
            }
            cur = sq.offset(df, dr);
        }
    }
    attacks
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(sq, occupied, &DIAGONALS)
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(sq, occupied, &ORTHOGONALS)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// Squares a `piece` standing on `sq` attacks.
pub fn attacks_of(piece: Piece, sq: Square, occupied: Bitboard) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(sq, piece.color),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
    }
}

/// Reach of the single piece on `sq`; empty when the square is empty.
pub fn piece_attacks(pos: &Position, sq: Square) -> Bitboard {
    match pos.piece_at(sq) {
        Some(piece) => attacks_of(piece, sq, pos.occupied()),
        None => Bitboard::EMPTY,
    }
}

/// Union of the attack squares of every `color` piece.
pub fn attacked_squares(pos: &Position, color: Color) -> Bitboard {
    let occupied = pos.occupied();
    let mut attacked = Bitboard::EMPTY;
    for sq in pos.occupied_by(color) {
        if let Some(piece) = pos.piece_at(sq) {
            attacked |= attacks_of(piece, sq, occupied);
        }
    }
    attacked
}

/// Whether any `by` piece attacks `target`. Looks outward from the target
/// instead of building the whole attacked set.
pub fn is_square_attacked(pos: &Position, target: Square, by: Color) -> bool {
    let occupied = pos.occupied();
    let is = |sq: Square, kinds: &[PieceKind]| {
        pos.piece_at(sq)
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // A `by` pawn attacks target iff a pawn of the other color on target
    // would attack that pawn's square.
    if pawn_attacks(target, by.opposite())
        .squares()
        .any(|sq| is(sq, &[PieceKind::Pawn]))
    {
        return true;
    }
    if knight_attacks(target)
        .squares()
        .any(|sq| is(sq, &[PieceKind::Knight]))
    {
        return true;
    }
    if king_attacks(target)
        .squares()
        .any(|sq| is(sq, &[PieceKind::King]))
    {
        return true;
    }
    if bishop_attacks(target, occupied)
        .squares()
        .any(|sq| is(sq, &[PieceKind::Bishop, PieceKind::Queen]))
    {
        return true;
    }
    rook_attacks(target, occupied)
        .squares()
        .any(|sq| is(sq, &[PieceKind::Rook, PieceKind::Queen]))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
