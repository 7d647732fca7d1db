//! Material-only position evaluation.

use chess_core::{Color, PieceKind, Position};

/// Material values in pawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 0];

/// Material balance of the position, White minus Black.
///
/// Positive favours White regardless of whose turn it is.
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0i32;

    for kind in PieceKind::ALL {
        let value = PIECE_VALUES[kind.idx()];
        let white_count = pos.pieces(Color::White, kind).popcount() as i32;
        let black_count = pos.pieces(Color::Black, kind).popcount() as i32;
        score += value * (white_count - black_count);
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
