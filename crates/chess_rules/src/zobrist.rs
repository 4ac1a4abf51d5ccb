//! Position identity.
//!
//! Two positions get the same key when they have the same placement, side to
//! move, castling availability and en passant file. The en passant file only
//! counts when a pawn can actually make the capture. Move counters and the
//! `is_castled` flag are not part of the identity. History entries store the
//! key and repetition counting compares it.

use crate::attacks::pawn_attacks;
use crate::bitboard::Bitboard;
use crate::castle::CastleSide;
use crate::position::Position;
use crate::types::{Color, Piece, PieceKind, Square};

const PIECE_KEYS: usize = 2 * 6 * 64;
const CASTLING_BASE: usize = PIECE_KEYS;
const EN_PASSANT_BASE: usize = CASTLING_BASE + 4;
const SIDE_KEY: usize = EN_PASSANT_BASE + 8;
const KEY_COUNT: usize = SIDE_KEY + 1;

/// One flat table of random keys, filled at compile time from a fixed seed.
pub struct ZobristKeys {
    keys: [u64; KEY_COUNT],
}

impl ZobristKeys {
    const fn generate(seed: u64) -> Self {
        // splitmix64
        let mut state = seed;
        let mut keys = [0u64; KEY_COUNT];
        let mut i = 0;
        while i < KEY_COUNT {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            keys[i] = z ^ (z >> 31);
            i += 1;
        }
        Self { keys }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        let slot = (piece.color.idx() * 6 + piece.kind.idx()) * 64 + sq.index() as usize;
        self.keys[slot]
    }

    #[inline(always)]
    pub fn castling_key(&self, color: Color, side: CastleSide) -> u64 {
        self.keys[CASTLING_BASE + color.idx() * 2 + side.idx()]
    }

    /// Key for an en passant target on `file` (0 = a).
    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.keys[EN_PASSANT_BASE + (file as usize & 7)]
    }

    /// XORed in when Black is to move.
    #[inline(always)]
    pub fn black_to_move(&self) -> u64 {
        self.keys[SIDE_KEY]
    }

    /// Full key of `pos`, computed from scratch.
    pub fn position_key(&self, pos: &Position) -> u64 {
        let mut key = pos
            .placed_pieces()
            .fold(0u64, |k, pp| k ^ self.piece_key(pp.piece(), pp.square));
        if pos.side_to_move() == Color::Black {
            key ^= self.black_to_move();
        }
        for color in Color::ALL {
            let record = pos.castling(color);
            for side in CastleSide::ALL {
                if record.available(side) {
                    key ^= self.castling_key(color, side);
                }
            }
        }
        if let Some(ep) = pos.en_passant()
            && en_passant_capturable(pos, ep)
        {
            key ^= self.ep_key(ep.file() as u8);
        }
        key
    }
}

/// Whether a pawn of the side to move stands ready to take on `ep`.
fn en_passant_capturable(pos: &Position, ep: Square) -> bool {
    let mover = pos.side_to_move();
    let pawn = Some(Piece::new(mover, PieceKind::Pawn));
    let pawns: Bitboard = pos
        .occupied_by(mover)
        .squares()
        .filter(|&sq| pos.piece_at(sq) == pawn)
        .collect();
    !(pawn_attacks(ep, mover.opposite()) & pawns).is_empty()
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::generate(0x2545_F491_4F6C_DD1D);

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
