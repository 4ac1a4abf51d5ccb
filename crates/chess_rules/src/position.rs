//! Position snapshot and its move transition.
//!
//! A `Position` is a plain value. `play` returns the successor position and
//! leaves `self` untouched, which is what the legality check relies on: a
//! candidate move is played on a copy, the copy is inspected and dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attacks::is_square_attacked;
use crate::bitboard::Bitboard;
use crate::castle::{self, CastleSide, CastlingRecord};
use crate::error::FenError;
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A piece together with the square it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}

impl PlacedPiece {
    pub fn piece(&self) -> Piece {
        Piece::new(self.color, self.kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; 64],
    occupied: [Bitboard; 2],
    side_to_move: Color,
    castling: [CastlingRecord; 2],
    en_passant: Option<Square>, // square behind a pawn that just advanced 2
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Board with no pieces, White to move and no castling rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            occupied: [Bitboard::EMPTY; 2],
            side_to_move: Color::White,
            castling: [CastlingRecord::new(false, false); 2],
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = [CastlingRecord::INITIAL; 2];

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as i8;
            for (color, home, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(h), Some(p2)) = (Square::new(f, home), Square::new(f, pawns)) {
                    p.put(h, Piece::new(color, kind));
                    p.put(p2, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        p
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let mut p = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece = Piece::from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
                    let sq = Square::new(file, rank).ok_or(FenError::RankWidth {
                        rank: rank as u8 + 1,
                    })?;
                    p.put(sq, piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth {
                        rank: rank as u8 + 1,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank as u8 + 1,
                });
            }
        }

        for color in Color::ALL {
            let kings = p
                .placed_pieces()
                .filter(|pp| pp.color == color && pp.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(FenError::KingCount(color));
            }
        }

        p.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };
        let waiting = p.side_to_move.opposite();
        if p.in_check(waiting) {
            return Err(FenError::OpponentInCheck(waiting));
        }

        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::Short),
                    'Q' => (Color::White, CastleSide::Long),
                    'k' => (Color::Black, CastleSide::Short),
                    'q' => (Color::Black, CastleSide::Long),
                    _ => return Err(FenError::CastlingChar(c)),
                };
                let record = &mut p.castling[color.idx()];
                *record = match side {
                    CastleSide::Short => CastlingRecord::new(true, record.long_available()),
                    CastleSide::Long => CastlingRecord::new(record.short_available(), true),
                };
            }
        }
        // A right without its king and rook at home could never be revoked
        for color in Color::ALL {
            for side in CastleSide::ALL {
                let geo = castle::geometry(color, side);
                if p.castling[color.idx()].available(side)
                    && (p.piece_at(geo.king_from) != Some(Piece::new(color, PieceKind::King))
                        || p.piece_at(geo.rook_from) != Some(Piece::new(color, PieceKind::Rook)))
                {
                    debug!(
                        ?color,
                        ?side,
                        "dropping castling right without king and rook at home"
                    );
                    p.castling[color.idx()].revoke(side);
                }
            }
        }

        p.en_passant = match parts[3] {
            "-" => None,
            s => {
                let target = s
                    .parse::<Square>()
                    .map_err(|_| FenError::EnPassant(s.to_string()))?;
                if !p.valid_en_passant_target(target) {
                    return Err(FenError::EnPassant(s.to_string()));
                }
                Some(target)
            }
        };

        let counter = |s: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match s {
                Some(s) => s.parse().map_err(|_| FenError::Counter(s.to_string())),
                None => Ok(default),
            }
        };
        p.halfmove_clock = counter(parts.get(4), 0)?;
        p.fullmove_number = counter(parts.get(5), 1)?;

        Ok(p)
    }

    /// The square a pawn of the waiting side just skipped: on the third rank
    /// from that side's point of view, empty, with the pawn right past it.
    fn valid_en_passant_target(&self, target: Square) -> bool {
        let mover = self.side_to_move;
        let expected_rank = match mover {
            Color::White => 5,
            Color::Black => 2,
        };
        target.rank() == expected_rank
            && self.piece_at(target).is_none()
            && target.offset(0, -mover.forward()).and_then(|sq| self.piece_at(sq))
                == Some(Piece::new(mover.opposite(), PieceKind::Pawn))
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut gap = 0;
            for file in 0..8 {
                match Square::new(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push_str(match self.side_to_move {
            Color::White => " w ",
            Color::Black => " b ",
        });

        let mut rights = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::Short, 'K'),
            (Color::White, CastleSide::Long, 'Q'),
            (Color::Black, CastleSide::Short, 'k'),
            (Color::Black, CastleSide::Long, 'q'),
        ] {
            if self.castling(color).available(side) {
                rights.push(c);
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        out.push_str(&rights);

        match self.en_passant {
            Some(sq) => out.push_str(&format!(" {sq}")),
            None => out.push_str(" -"),
        }
        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index() as usize]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling(&self, color: Color) -> CastlingRecord {
        self.castling[color.idx()]
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn occupied(&self) -> Bitboard {
        self.occupied[0] | self.occupied[1]
    }

    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.idx()]
    }

    pub fn placed_pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.occupied().squares().filter_map(|square| {
            self.piece_at(square).map(|pc| PlacedPiece {
                color: pc.color,
                kind: pc.kind,
                square,
            })
        })
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.occupied_by(c)
            .squares()
            .find(|&sq| self.piece_at(sq) == Some(Piece::new(c, PieceKind::King)))
    }

    /// Whether `c`'s king is attacked.
    ///
    /// # Panics
    /// If `c` has no king. Positions built by this crate always have one, so
    /// a missing king means the position was corrupted.
    pub fn in_check(&self, c: Color) -> bool {
        let Some(ksq) = self.king_square(c) else {
            panic!("no {c:?} king on the board: position invariant violated");
        };
        is_square_attacked(self, ksq, c.opposite())
    }

    /// Position identity used by history entries and repetition counting.
    pub fn zobrist(&self) -> u64 {
        ZOBRIST.position_key(self)
    }

    /// The piece `mv` would remove from the board, and where it stands.
    pub fn captured_by(&self, mv: &Move) -> Option<(Square, Piece)> {
        let sq = match mv.move_kind {
            MoveKind::EnPassant => mv.from.offset(mv.to.file() - mv.from.file(), 0)?,
            MoveKind::CastleShort | MoveKind::CastleLong => return None,
            MoveKind::Normal | MoveKind::Capture => mv.to,
        };
        self.piece_at(sq)
            .filter(|pc| pc.color != mv.color)
            .map(|pc| (sq, pc))
    }

    /// Successor position after `mv`. Legality is not checked here; callers
    /// play moves taken from the move generator.
    pub fn play(&self, mv: &Move) -> Position {
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    fn apply(&mut self, mv: &Move) {
        let moved = mv.piece();
        let captured = self.captured_by(mv);
        debug_assert_eq!(self.piece_at(mv.from), Some(moved), "no {moved:?} on {}", mv.from);

        self.en_passant = None;
        let mut reset_clock = moved.kind == PieceKind::Pawn || captured.is_some();

        if let Some((sq, _)) = captured {
            self.remove(sq);
        }
        self.remove(mv.from);
        let placed = match mv.promotion {
            Some(kind) => {
                reset_clock = true;
                Piece::new(moved.color, kind)
            }
            None => moved,
        };
        self.put(mv.to, placed);

        let side = match mv.move_kind {
            MoveKind::CastleShort => Some(CastleSide::Short),
            MoveKind::CastleLong => Some(CastleSide::Long),
            _ => None,
        };
        if let Some(side) = side {
            let geo = castle::geometry(moved.color, side);
            if let Some(rook) = self.remove(geo.rook_from) {
                self.put(geo.rook_to, rook);
            }
            self.castling[moved.color.idx()].mark_castled();
        }

        // Rights are lost by moving the king, moving a rook off its home
        // square, or losing a rook on its home square.
        match moved.kind {
            PieceKind::King => self.castling[moved.color.idx()].revoke_all(),
            PieceKind::Rook => {
                if let Some(side) = castle::rook_home_side(moved.color, mv.from) {
                    self.castling[moved.color.idx()].revoke(side);
                }
            }
            _ => {}
        }
        if let Some((sq, pc)) = captured
            && pc.kind == PieceKind::Rook
            && let Some(side) = castle::rook_home_side(pc.color, sq)
        {
            self.castling[pc.color.idx()].revoke(side);
        }

        if moved.kind == PieceKind::Pawn && (mv.to.rank() - mv.from.rank()).abs() == 2 {
            self.en_passant = mv.from.offset(0, moved.color.forward());
        }

        self.halfmove_clock = if reset_clock {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Place `pc` on `sq`. Used to set up positions; the square must be
    /// empty.
    pub fn put(&mut self, sq: Square, pc: Piece) {
        debug_assert!(self.piece_at(sq).is_none(), "{sq} is already occupied");
        self.board[sq.index() as usize] = Some(pc);
        self.occupied[pc.color.idx()].insert(sq);
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let pc = self.board[sq.index() as usize].take()?;
        self.occupied[pc.color.idx()].remove(sq);
        Some(pc)
    }

    pub fn set_side_to_move(&mut self, c: Color) {
        self.side_to_move = c;
    }

    pub fn set_castling(&mut self, c: Color, record: CastlingRecord) {
        self.castling[c.idx()] = record;
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
