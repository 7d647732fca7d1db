//! Error types for position setup and move-text parsing.

use thiserror::Error;

/// A FEN string that could not be turned into a [`Position`](crate::Position).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("empty FEN")]
    Empty,

    #[error("FEN has {0} fields, expected at most 6")]
    TooManyFields(usize),

    #[error("FEN board has {0} ranks, expected 8")]
    RankCount(usize),

    #[error("FEN rank {0:?} does not describe exactly 8 files")]
    BadRank(String),

    #[error("invalid piece character {0:?} in FEN")]
    BadPiece(char),

    #[error("invalid side to move {0:?} in FEN")]
    BadSideToMove(String),

    #[error("invalid castling field {0:?} in FEN")]
    BadCastling(String),

    #[error("invalid en passant square {0:?} in FEN")]
    BadEnPassant(String),

    #[error("invalid move counter {0:?} in FEN")]
    BadCounter(String),
}

/// Why a piece of move text could not be turned into a legal move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Neither coordinate nor algebraic syntax.
    #[error("invalid move format {0:?}: use coordinates like e2e4 or algebraic like Nf3")]
    Unparseable(String),

    /// Well-formed text that does not name a legal move in this position.
    #[error("illegal move {0:?}")]
    Illegal(String),

    /// Algebraic text that matches more than one legal move.
    #[error("ambiguous move {0:?}")]
    Ambiguous(String),
}
