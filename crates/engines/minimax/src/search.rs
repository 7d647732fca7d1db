//! Fixed-depth minimax with alpha-beta pruning

use chess_core::{legal_moves, Color, Move, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::eval::evaluate;

/// Window bound used for the running best value and the initial window.
pub const INFINITY: i32 = 1_000_000_000;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move and its value, `None` iff the root has no legal move
    pub best_move: Option<(Move, i32)>,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// Minimax value of `pos` searched `depth` plies deep.
///
/// `maximizing` is true when White's choice is being made at this node; it
/// alternates with each ply. Values are material balances from White's side.
/// Terminal positions and the horizon are scored statically. The window
/// `(alpha, beta)` only prunes; called with `(-INFINITY, INFINITY)` the
/// result equals an exhaustive minimax of the same depth.
pub fn minimax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(pos);
    }

    let moves = legal_moves(pos);
    if pos.outcome_with(!moves.is_empty()).is_some() {
        return evaluate(pos);
    }

    if maximizing {
        let mut best = -INFINITY;
        for mv in moves {
            let mut child = pos.apply(mv);
            *nodes += 1;
            let value = minimax(&mut child, depth - 1, alpha, beta, false, nodes);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let mut child = pos.apply(mv);
            *nodes += 1;
            let value = minimax(&mut child, depth - 1, alpha, beta, true, nodes);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

/// Searches every root move in random order and keeps the first one with
/// the best value for the side to move.
///
/// Each child is searched with a full window at `depth - 1`, so a depth of
/// zero scores the children statically, the same as depth one.
pub(crate) fn search_root(
    pos: &Position,
    depth: u8,
    rng: &mut StdRng,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut tmp = pos.clone();
    let mut moves = legal_moves(&tmp);
    if moves.is_empty() {
        return None;
    }
    moves.shuffle(rng);

    let maximizing = tmp.side_to_move == Color::White;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let value = {
            let mut child = tmp.apply(mv);
            *nodes += 1;
            minimax(
                &mut child,
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                !maximizing,
                nodes,
            )
        };

        let improves = match best {
            None => true,
            Some((_, best_value)) if maximizing => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if improves {
            best = Some((mv, value));
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
