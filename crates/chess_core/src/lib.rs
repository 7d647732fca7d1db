pub mod bitboard;
pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod outcome;
pub mod perft;
pub mod san;
pub mod types;
pub mod uci;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use outcome::*;
pub use perft::{perft, perft_divide};
pub use san::San;
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait, implemented by move-choosing engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Material score of the best line, positive favouring White
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait for engines that pick a reply in a position.
pub trait Engine: Send {
    /// Search the position to a fixed depth and return the chosen move.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
