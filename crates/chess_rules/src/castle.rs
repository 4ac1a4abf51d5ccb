//! Castling rule: per-color castling record, the static square geometry and
//! the availability predicates.
//!
//! The predicates only look at rights and at the squares the king crosses.
//! Whether the king is currently in check is checked by the move generator
//! before it asks this module, and whether the path is empty is checked
//! there too.

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::types::{Color, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Short,
    Long,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    pub fn idx(self) -> usize {
        match self {
            CastleSide::Short => 0,
            CastleSide::Long => 1,
        }
    }
}

/// Castling state of one color. Rights can only be revoked, never granted
/// back, and castling happens at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRecord {
    is_castled: bool,
    short_available: bool,
    long_available: bool,
}

impl CastlingRecord {
    /// State at the start of a game.
    pub const INITIAL: CastlingRecord = CastlingRecord {
        is_castled: false,
        short_available: true,
        long_available: true,
    };

    /// Record with the given rights that has not castled yet.
    pub fn new(short_available: bool, long_available: bool) -> Self {
        Self {
            is_castled: false,
            short_available,
            long_available,
        }
    }

    pub fn is_castled(&self) -> bool {
        self.is_castled
    }

    pub fn short_available(&self) -> bool {
        self.short_available
    }

    pub fn long_available(&self) -> bool {
        self.long_available
    }

    pub fn available(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Short => self.short_available,
            CastleSide::Long => self.long_available,
        }
    }

    pub(crate) fn revoke(&mut self, side: CastleSide) {
        match side {
            CastleSide::Short => self.short_available = false,
            CastleSide::Long => self.long_available = false,
        }
    }

    pub(crate) fn revoke_all(&mut self) {
        self.short_available = false;
        self.long_available = false;
    }

    pub(crate) fn mark_castled(&mut self) {
        debug_assert!(!self.is_castled, "a color can only castle once");
        self.is_castled = true;
        self.revoke_all();
    }

    /// True when `other` grants nothing this record had already lost.
    pub fn is_superset_of(&self, other: &CastlingRecord) -> bool {
        (self.short_available || !other.short_available)
            && (self.long_available || !other.long_available)
            && (!self.is_castled || other.is_castled)
    }
}

impl Default for CastlingRecord {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Squares touched by one castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleGeometry {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must not be attacked by the opponent.
    pub safe: &'static [Square],
    /// Squares between king and rook that must be empty.
    pub empty: &'static [Square],
}

/// Indexed by `[color.idx()][side.idx()]`.
pub static CASTLE_GEOMETRY: [[CastleGeometry; 2]; 2] = [
    [
        CastleGeometry {
            king_from: Square::E1,
            king_to: Square::G1,
            rook_from: Square::H1,
            rook_to: Square::F1,
            safe: &[Square::F1, Square::G1],
            empty: &[Square::F1, Square::G1],
        },
        CastleGeometry {
            king_from: Square::E1,
            king_to: Square::C1,
            rook_from: Square::A1,
            rook_to: Square::D1,
            safe: &[Square::B1, Square::C1, Square::D1],
            empty: &[Square::B1, Square::C1, Square::D1],
        },
    ],
    [
        CastleGeometry {
            king_from: Square::E8,
            king_to: Square::G8,
            rook_from: Square::H8,
            rook_to: Square::F8,
            safe: &[Square::F8, Square::G8],
            empty: &[Square::F8, Square::G8],
        },
        CastleGeometry {
            king_from: Square::E8,
            king_to: Square::C8,
            rook_from: Square::A8,
            rook_to: Square::D8,
            safe: &[Square::B8, Square::C8, Square::D8],
            empty: &[Square::B8, Square::C8, Square::D8],
        },
    ],
];

pub fn geometry(color: Color, side: CastleSide) -> &'static CastleGeometry {
    &CASTLE_GEOMETRY[color.idx()][side.idx()]
}

/// The side whose rook starts on `sq`, if `sq` is one of `color`'s rook
/// home squares.
pub fn rook_home_side(color: Color, sq: Square) -> Option<CastleSide> {
    CastleSide::ALL
        .into_iter()
        .find(|&side| geometry(color, side).rook_from == sq)
}

/// Whether `color` may castle on `side` given its record and the squares the
/// opponent attacks. Does not check the king's own square.
pub fn can_castle(
    color: Color,
    side: CastleSide,
    record: &CastlingRecord,
    opponent_attacks: Bitboard,
) -> bool {
    !record.is_castled()
        && record.available(side)
        && geometry(color, side)
            .safe
            .iter()
            .all(|&sq| !opponent_attacks.contains(sq))
}

pub fn can_castle_short(color: Color, record: &CastlingRecord, opponent_attacks: Bitboard) -> bool {
    can_castle(color, CastleSide::Short, record, opponent_attacks)
}

pub fn can_castle_long(color: Color, record: &CastlingRecord, opponent_attacks: Bitboard) -> bool {
    can_castle(color, CastleSide::Long, record, opponent_attacks)
}

#[cfg(test)]
#[path = "castle_tests.rs"]
mod castle_tests;
