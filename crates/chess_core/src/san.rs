//! Standard algebraic notation: `Nf3`, `exd5`, `R1a3`, `e8=Q+`, `O-O`.

use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::error::MoveParseError;
use crate::movegen::legal_moves;
use crate::types::*;

/// Syntactic content of an algebraic move, before it is matched against a
/// position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum San {
    Castle {
        kingside: bool,
    },
    Normal {
        /// `None` means a pawn move.
        piece: Option<PieceKind>,
        /// Disambiguation hints, 0-based.
        file: Option<u8>,
        rank: Option<u8>,
        to: u8,
        promo: Option<PieceKind>,
    },
}

impl San {
    /// Accepts `[NBKRQ]?[a-h]?[1-8]?[-x]?[a-h][1-8](=?[nbrqkNBRQK])?[+#]?`
    /// and the castling forms `O-O`, `O-O-O`, `0-0`, `0-0-0` with an optional
    /// check suffix.
    pub fn parse(text: &str) -> Option<San> {
        let s = text.strip_suffix(|c: char| c == '+' || c == '#').unwrap_or(text);

        match s {
            "O-O" | "0-0" => return Some(San::Castle { kingside: true }),
            "O-O-O" | "0-0-0" => return Some(San::Castle { kingside: false }),
            _ => {}
        }

        // Read right to left so every optional part is unambiguous.
        let mut chars: Vec<char> = s.chars().collect();

        let mut promo = None;
        if let Some(&last) = chars.last()
            && "nbrqkNBRQK".contains(last)
        {
            promo = PieceKind::from_char(last);
            chars.pop();
            if chars.last() == Some(&'=') {
                chars.pop();
            }
        }

        let rank_ch = chars.pop()?;
        let file_ch = chars.pop()?;
        let to = coord_to_sq(&format!("{file_ch}{rank_ch}"))?;

        if matches!(chars.last(), Some('-' | 'x')) {
            chars.pop();
        }

        let rank = match chars.last() {
            Some(&c @ '1'..='8') => {
                chars.pop();
                Some(c as u8 - b'1')
            }
            _ => None,
        };
        let file = match chars.last() {
            Some(&c @ 'a'..='h') => {
                chars.pop();
                Some(c as u8 - b'a')
            }
            _ => None,
        };
        let piece = match chars.last() {
            Some(&c @ ('N' | 'B' | 'K' | 'R' | 'Q')) => {
                chars.pop();
                PieceKind::from_char(c)
            }
            _ => None,
        };

        if !chars.is_empty() {
            return None;
        }
        Some(San::Normal {
            piece,
            file,
            rank,
            to,
            promo,
        })
    }

    /// Matches the parsed move against the legal moves of `pos`. `text` is
    /// only used for error messages.
    pub fn resolve(&self, pos: &Position, text: &str) -> Result<Move, MoveParseError> {
        let illegal = || MoveParseError::Illegal(text.to_string());
        let legal = legal_moves(pos);

        let (piece, file, rank, to, promo) = match *self {
            San::Castle { kingside } => {
                return legal
                    .into_iter()
                    .find(|m| m.is_castle && (file_of(m.to) == 6) == kingside)
                    .ok_or_else(illegal);
            }
            San::Normal {
                piece,
                file,
                rank,
                to,
                promo,
            } => (piece, file, rank, to, promo),
        };

        let us = pos.side_to_move;
        let mut from_mask = Bitboard::ALL;
        if let Some(f) = file {
            from_mask &= Bitboard::file(f);
        }
        if let Some(r) = rank {
            from_mask &= Bitboard::rank(r);
        }

        match (piece, file, rank) {
            (Some(kind), _, _) => from_mask &= pos.pieces(us, kind),
            // Both origin coordinates given: any piece may move, castling included.
            (None, Some(f), Some(r)) => {
                let from = r * 8 + f;
                return legal
                    .into_iter()
                    .find(|m| m.from == from && m.to == to && m.promo == promo)
                    .ok_or_else(illegal);
            }
            (None, _, _) => {
                from_mask &= pos.pieces(us, PieceKind::Pawn);
                // Pawn captures must name their file.
                if file.is_none() {
                    from_mask &= Bitboard::file(file_of(to) as u8);
                }
            }
        }

        let mut candidates = legal
            .into_iter()
            .filter(|m| from_mask.contains(m.from) && m.to == to && m.promo == promo);
        let found = candidates.next().ok_or_else(illegal)?;
        if candidates.next().is_some() {
            return Err(MoveParseError::Ambiguous(text.to_string()));
        }
        Ok(found)
    }
}
