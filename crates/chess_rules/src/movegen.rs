//! Legal move generation.
//!
//! Candidates come from each piece's movement template. A candidate is kept
//! only if, after playing it on a copy of the position, the mover's king is
//! not attacked. Castling is added separately, when the castle rule allows
//! it, the king is not in check and the path to the rook is empty.

use crate::attacks::{attacked_squares, attacks_of};
use crate::bitboard::Bitboard;
use crate::castle::{self, CastleSide};
use crate::position::Position;
use crate::types::*;

/// All legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// All legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    for from in pos.occupied_by(pos.side_to_move()) {
        candidates_from(pos, from, out);
    }
    out.retain(|mv| keeps_king_safe(pos, mv));
}

/// Legal moves of the piece on `from`. Empty if the square is empty or the
/// piece does not belong to the side to move.
pub fn legal_moves_from(pos: &Position, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if pos.occupied_by(pos.side_to_move()).contains(from) {
        candidates_from(pos, from, &mut out);
        out.retain(|mv| keeps_king_safe(pos, mv));
    }
    out
}

pub fn has_legal_move(pos: &Position) -> bool {
    let mut buf = Vec::with_capacity(32);
    pos.occupied_by(pos.side_to_move()).squares().any(|from| {
        buf.clear();
        candidates_from(pos, from, &mut buf);
        buf.iter().any(|mv| keeps_king_safe(pos, mv))
    })
}

pub fn is_legal(pos: &Position, mv: &Move) -> bool {
    mv.color == pos.side_to_move() && legal_moves_from(pos, mv.from).contains(mv)
}

/// Play `mv` on a throwaway copy and look at the mover's king.
fn keeps_king_safe(pos: &Position, mv: &Move) -> bool {
    !pos.play(mv).in_check(mv.color)
}

fn candidates_from(pos: &Position, from: Square, out: &mut Vec<Move>) {
    let Some(pc) = pos.piece_at(from) else {
        return;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc, out),
        PieceKind::King => {
            gen_steps(pos, from, pc, out);
            gen_castle(pos, from, pc.color, out);
        }
        _ => gen_steps(pos, from, pc, out),
    }
}

/// Knight, bishop, rook, queen and plain king moves: every attacked square
/// not held by a friendly piece.
fn gen_steps(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let enemy = pos.occupied_by(pc.color.opposite());
    let targets = attacks_of(pc, from, pos.occupied()) & !pos.occupied_by(pc.color);
    for to in targets {
        let kind = if enemy.contains(to) {
            MoveKind::Capture
        } else {
            MoveKind::Normal
        };
        out.push(Move::new(pc, from, to, kind));
    }
}

fn gen_pawn(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let dir = pc.color.forward();
    let start_rank: i8 = match pc.color {
        Color::White => 1,
        Color::Black => 6,
    };

    // forward 1, then 2 from the start rank
    if let Some(to) = from.offset(0, dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(out, Move::new(pc, from, to, MoveKind::Normal));
        if from.rank() == start_rank
            && let Some(to2) = from.offset(0, 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(pc, from, to2, MoveKind::Normal));
        }
    }

    // captures + en passant
    let enemy = pos.occupied_by(pc.color.opposite());
    for to in attacks_of(pc, from, Bitboard::EMPTY) {
        if enemy.contains(to) {
            push_pawn_move(out, Move::new(pc, from, to, MoveKind::Capture));
        } else if pos.en_passant() == Some(to) {
            out.push(Move::new(pc, from, to, MoveKind::EnPassant));
        }
    }
}

/// Push `mv`, expanded into the four promotions when it reaches the last rank.
fn push_pawn_move(out: &mut Vec<Move>, mv: Move) {
    if mv.to.rank() == mv.color.opposite().home_rank() as i8 {
        for kind in PieceKind::PROMOTIONS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let record = pos.castling(c);
    if record.is_castled() || !(record.short_available() || record.long_available()) {
        return;
    }
    // The castle rule does not look at the king's own square; castling out
    // of check is refused here.
    if pos.in_check(c) {
        return;
    }

    let opponent_attacks = attacked_squares(pos, c.opposite());
    let rook = Some(Piece::new(c, PieceKind::Rook));
    for side in CastleSide::ALL {
        let geo = castle::geometry(c, side);
        if from != geo.king_from
            || pos.piece_at(geo.rook_from) != rook
            || geo.empty.iter().any(|&sq| pos.piece_at(sq).is_some())
            || !castle::can_castle(c, side, &record, opponent_attacks)
        {
            continue;
        }
        let kind = match side {
            CastleSide::Short => MoveKind::CastleShort,
            CastleSide::Long => MoveKind::CastleLong,
        };
        out.push(Move::new(Piece::new(c, PieceKind::King), from, geo.king_to, kind));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
