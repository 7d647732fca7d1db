//! Coordinate (UCI) move notation: `e2e4`, `e7e8q`.

use crate::{board::Position, movegen::legal_moves, types::*};

/// Matches the coordinate pattern `[a-h][1-8][a-h][1-8][qrbn]?`,
/// case-insensitively, without looking at any position.
///
/// The returned move carries no castle/en-passant flags; resolve it against
/// the legal move list before playing it.
pub fn parse_coordinate(txt: &str) -> Option<Move> {
    let lower = txt.to_ascii_lowercase();
    if !(4..=5).contains(&lower.len()) || !lower.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&lower[0..2])?;
    let to = coord_to_sq(&lower[2..4])?;
    let promo = match lower.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return None,
    };
    Some(Move::with_promo(from, to, promo))
}

/// Finds the legal move with the same coordinates, flags included.
pub fn find_legal(pos: &Position, mv: Move) -> Option<Move> {
    legal_moves(pos).into_iter().find(|m| *m == mv)
}

/// Parses coordinate text and matches it against the legal moves.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    find_legal(pos, parse_coordinate(txt)?)
}
