//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material-only
//! evaluation, plus grading of submitted moves against the engine's choice.

mod eval;
mod grade;
mod search;

use chess_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Minimax engine with randomised tie-breaking between equal root moves.
///
/// This engine uses:
/// - Plain minimax with alpha-beta pruning, values from White's side
/// - Material-only evaluation (1/3/3/5/9)
/// - A seedable RNG that shuffles root moves before searching them
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    /// Engine whose tie-breaking is seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine with reproducible tie-breaking.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Nodes visited since the last `new_game`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks a reply for the side to move in `pos`.
    ///
    /// Among moves with equal value the first one in a random order wins.
    /// The outcome is empty iff there is no legal move.
    pub fn select_best_move(&mut self, pos: &Position, depth: u8) -> SearchOutcome {
        let mut nodes = 0u64;
        let best_move = search::search_root(pos, depth, &mut self.rng, &mut nodes);
        self.nodes += nodes;

        match best_move {
            Some((mv, value)) => {
                tracing::debug!(best = %mv, value, depth, nodes, "root search done")
            }
            None => tracing::debug!(depth, "root search: no legal moves"),
        }

        SearchOutcome { best_move, nodes }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        let outcome = self.select_best_move(pos, depth);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::evaluate;
pub use grade::{rating_for_diff, GradeError, MoveGrade, NO_MOVES_RATING};
pub use search::{minimax, SearchOutcome, INFINITY};
