use chess_core::{FenError, MoveParseError};
use minimax_engine::GradeError;
use thiserror::Error;

/// Why a coaching request was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoachError {
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] FenError),

    #[error("invalid move format {0:?}: use UCI like e2e4 or SAN like Nf3")]
    InvalidMoveFormat(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("no legal moves")]
    NoLegalMoves,
}

impl CoachError {
    /// Whether the request itself was at fault. Every current variant is.
    pub fn is_client_error(&self) -> bool {
        match self {
            CoachError::InvalidPosition(_)
            | CoachError::InvalidMoveFormat(_)
            | CoachError::IllegalMove(_)
            | CoachError::NoLegalMoves => true,
        }
    }

    /// Stable snake_case identifier for the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            CoachError::InvalidPosition(_) => "invalid_position",
            CoachError::InvalidMoveFormat(_) => "invalid_move_format",
            CoachError::IllegalMove(_) => "illegal_move",
            CoachError::NoLegalMoves => "no_legal_moves",
        }
    }
}

impl From<MoveParseError> for CoachError {
    fn from(err: MoveParseError) -> Self {
        match err {
            MoveParseError::Unparseable(text) => CoachError::InvalidMoveFormat(text),
            MoveParseError::Illegal(text) | MoveParseError::Ambiguous(text) => {
                CoachError::IllegalMove(text)
            }
        }
    }
}

impl From<GradeError> for CoachError {
    fn from(err: GradeError) -> Self {
        match err {
            GradeError::IllegalCandidate(text) => CoachError::IllegalMove(text),
        }
    }
}
