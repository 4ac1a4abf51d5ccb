//! The game record: the authoritative position plus everything that has
//! happened to reach it.
//!
//! `Board` is the only place where game state changes. `apply_move` checks
//! the move against the legal move list of the current position, builds the
//! successor snapshot, and only then commits it together with the history
//! entry and capture ledger. A refused move changes nothing.

use serde::Serialize;
use tracing::{debug, trace};

use crate::attacks::attacked_squares;
use crate::bitboard::Bitboard;
use crate::castle::CastlingRecord;
use crate::error::{FenError, MoveError};
use crate::movegen::{has_legal_move, legal_moves, legal_moves_from};
use crate::position::{PlacedPiece, Position};
use crate::types::*;

/// One played move and what it led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    #[serde(rename = "move")]
    pub mv: Move,
    pub color: Color,
    /// Zobrist identity of the position after the move.
    pub position: u64,
    pub captured: Option<Piece>,
    /// Whether the move gives check.
    pub is_check: bool,
}

impl HistoryEntry {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    position: Position,
    history: Vec<HistoryEntry>,
    /// Pieces of each color removed from play, indexed by `Color::idx`.
    captures: [Vec<Piece>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// A game starting from an arbitrary position, with empty history.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
            captures: [Vec::new(), Vec::new()],
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn pieces(&self) -> Vec<PlacedPiece> {
        self.position.placed_pieces().collect()
    }

    pub fn pieces_by_color(&self, color: Color) -> Vec<PlacedPiece> {
        self.position
            .placed_pieces()
            .filter(|pp| pp.color == color)
            .collect()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    pub fn castling(&self, color: Color) -> CastlingRecord {
        self.position.castling(color)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Pieces of `color` that have been captured, oldest first.
    pub fn captures(&self, color: Color) -> &[Piece] {
        &self.captures[color.idx()]
    }

    pub fn attacked_squares(&self, color: Color) -> Bitboard {
        attacked_squares(&self.position, color)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Where the piece on `sq` may legally go. Empty for an empty square or
    /// a piece of the side not to move.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        let mut out: Vec<Square> = legal_moves_from(&self.position, sq)
            .into_iter()
            .map(|mv| mv.to)
            .collect();
        // Promotions repeat the destination once per piece kind
        out.dedup();
        out
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.position.in_check(self.turn())
    }

    pub fn is_mate(&self) -> bool {
        self.is_check() && !has_legal_move(&self.position)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !has_legal_move(&self.position)
    }

    /// How many earlier positions in the history equal the current one. The
    /// set-up position is not part of the history and is not counted.
    pub fn repetition_count(&self) -> usize {
        let Some((current, earlier)) = self.history.split_last() else {
            return 0;
        };
        earlier
            .iter()
            .filter(|e| e.position == current.position)
            .count()
    }

    /// Find the legal move written in long algebraic form (`e2e4`, `e1g1`,
    /// `e7e8q`).
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        if !text.is_ascii() {
            return Err(MoveError::NoSuchMove(text.to_string()));
        }
        let (from, to, promo) = match text.len() {
            4 => (&text[0..2], &text[2..4], None),
            5 => (
                &text[0..2],
                &text[2..4],
                text[4..].chars().next().and_then(PieceKind::from_letter),
            ),
            _ => return Err(MoveError::NoSuchMove(text.to_string())),
        };
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        if text.len() == 5 && promo.is_none() {
            return Err(MoveError::NoSuchMove(text.to_string()));
        }

        legal_moves_from(&self.position, from)
            .into_iter()
            .find(|mv| mv.to == to && mv.promotion == promo)
            .ok_or_else(|| MoveError::NoSuchMove(text.to_string()))
    }

    /// Parse `text` with [`Board::parse_move`] and apply it.
    pub fn play(&mut self, text: &str) -> Result<(), MoveError> {
        let mv = self.parse_move(text)?;
        self.apply_move(mv)
    }

    /// Apply `mv` if it is legal in the current position. On error the board
    /// is left exactly as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let turn = self.turn();
        if mv.color != turn {
            trace!(%mv, ?turn, "move rejected: wrong side");
            return Err(MoveError::NotYourTurn {
                expected: turn,
                got: mv.color,
            });
        }
        if self.position.piece_at(mv.from).is_none() {
            trace!(%mv, "move rejected: empty origin");
            return Err(MoveError::NoPieceAt(mv.from));
        }
        if !legal_moves_from(&self.position, mv.from).contains(&mv) {
            trace!(%mv, "move rejected: illegal");
            return Err(MoveError::IllegalMove { mv });
        }

        let captured = self.position.captured_by(&mv).map(|(_, pc)| pc);
        let next = self.position.play(&mv);
        debug_assert!(
            Color::ALL.iter().all(|&c| next.king_square(c).is_some()),
            "{mv} removed a king"
        );
        let is_check = next.in_check(next.side_to_move());
        let entry = HistoryEntry {
            mv,
            color: mv.color,
            position: next.zobrist(),
            captured,
            is_check,
        };

        // Commit
        self.position = next;
        if let Some(pc) = captured {
            self.captures[pc.color.idx()].push(pc);
        }
        self.history.push(entry);

        debug!(
            ply = self.history.len(),
            color = ?mv.color,
            %mv,
            capture = captured.is_some(),
            check = is_check,
            "move applied"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
