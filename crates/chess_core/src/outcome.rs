//! Game termination: checkmate, stalemate and the automatic draws.
//!
//! Only draws that end the game without a claim are recognized:
//! insufficient material, the seventy-five-move rule and fivefold
//! repetition. Threefold repetition and the fifty-move rule need a claim and
//! do not end the game here.

use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::movegen::has_legal_move;
use crate::types::{Color, PieceKind};

/// Half-move clock value at which the game is drawn automatically.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game as a draw.
pub const FIVEFOLD: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    /// `None` for draws.
    pub winner: Option<Color>,
}

impl Outcome {
    /// PGN-style result label.
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl Position {
    /// The way the game has ended, or `None` if it is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome_with(has_legal_move(self))
    }

    /// Same as [`Position::outcome`] when the caller already knows whether a
    /// legal move exists, saving a second move generation.
    pub fn outcome_with(&self, has_moves: bool) -> Option<Outcome> {
        let us = self.side_to_move;
        if !has_moves {
            return Some(if self.in_check(us) {
                Outcome {
                    termination: Termination::Checkmate,
                    winner: Some(us.other()),
                }
            } else {
                Outcome {
                    termination: Termination::Stalemate,
                    winner: None,
                }
            });
        }
        let draw = |termination| Some(Outcome { termination, winner: None });
        if self.is_insufficient_material() {
            return draw(Termination::InsufficientMaterial);
        }
        if self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES {
            return draw(Termination::SeventyFiveMoves);
        }
        if self.repetition_count() >= FIVEFOLD {
            return draw(Termination::FivefoldRepetition);
        }
        None
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// `"1-0"`, `"0-1"`, `"1/2-1/2"`, or `"*"` while the game is in progress.
    pub fn result(&self) -> &'static str {
        self.outcome().map_or("*", |o| o.result())
    }

    /// Neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&c| self.has_insufficient_material(c))
    }

    /// True if `color` cannot deliver mate by any sequence of legal moves.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let ours = self.occupied_by(color);
        let heavy = self.pieces_of_kind(PieceKind::Pawn)
            | self.pieces_of_kind(PieceKind::Rook)
            | self.pieces_of_kind(PieceKind::Queen);
        if !(ours & heavy).is_empty() {
            return false;
        }

        let knights = self.pieces_of_kind(PieceKind::Knight);
        if !(ours & knights).is_empty() {
            // A lone knight mates only with help from enemy pieces that can
            // block the king's escape squares.
            let theirs = self.occupied_by(color.other());
            let blockers = theirs
                & !self.pieces_of_kind(PieceKind::King)
                & !self.pieces_of_kind(PieceKind::Queen);
            return ours.popcount() <= 2 && blockers.is_empty();
        }

        let bishops = self.pieces_of_kind(PieceKind::Bishop);
        if !(ours & bishops).is_empty() {
            let same_color = (bishops & Bitboard::DARK_SQUARES).is_empty()
                || (bishops & Bitboard::LIGHT_SQUARES).is_empty();
            return same_color
                && self.pieces_of_kind(PieceKind::Pawn).is_empty()
                && knights.is_empty();
        }

        true
    }
}
