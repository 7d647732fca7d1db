//! Rating a submitted move against the engine's own choice.

use chess_core::{find_legal, Color, Move, Position};
use thiserror::Error;

use crate::eval::evaluate;
use crate::search::{minimax, search_root, INFINITY};
use crate::MinimaxEngine;

/// Rating given when the position has no legal move to compare against.
pub const NO_MOVES_RATING: u8 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("move {0} is not legal in this position")]
    IllegalCandidate(String),
}

/// How good a submitted move is compared with the best root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGrade {
    /// 1 (blunder) to 10 (as good as the engine's choice)
    pub rating: u8,
    /// The engine's choice, `None` when there are no legal moves
    pub best_move: Option<Move>,
    pub best_value: i32,
    pub candidate_value: i32,
    /// Value lost by the candidate from the mover's point of view
    pub diff: i32,
}

impl MoveGrade {
    /// The engine's choice as coordinate text, or an empty string.
    pub fn hint_uci(&self) -> String {
        self.best_move.map(|mv| mv.to_string()).unwrap_or_default()
    }
}

/// Maps the value lost by a move to a 1-10 rating.
pub fn rating_for_diff(diff: i32) -> u8 {
    match diff {
        i32::MIN..=0 => 10,
        1 => 9,
        2 => 8,
        3 => 7,
        4 => 6,
        5 => 5,
        6 => 4,
        7..=8 => 3,
        9..=10 => 2,
        _ => 1,
    }
}

impl MinimaxEngine {
    /// Grades `candidate` by searching it to the same depth as the engine's
    /// own root search and comparing the two values.
    pub fn grade_move(
        &mut self,
        pos: &Position,
        candidate: Move,
        depth: u8,
    ) -> Result<MoveGrade, GradeError> {
        let mut nodes = 0u64;
        let Some((best_move, best_value)) = search_root(pos, depth, &mut self.rng, &mut nodes)
        else {
            let value = evaluate(pos);
            return Ok(MoveGrade {
                rating: NO_MOVES_RATING,
                best_move: None,
                best_value: value,
                candidate_value: value,
                diff: 0,
            });
        };

        let candidate = find_legal(pos, candidate)
            .ok_or_else(|| GradeError::IllegalCandidate(candidate.to_string()))?;

        let mut tmp = pos.clone();
        let maximizing = tmp.side_to_move == Color::White;
        let candidate_value = {
            let mut child = tmp.apply(candidate);
            nodes += 1;
            minimax(
                &mut child,
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                !maximizing,
                &mut nodes,
            )
        };
        self.nodes += nodes;

        let diff = if maximizing {
            best_value - candidate_value
        } else {
            candidate_value - best_value
        };
        let rating = rating_for_diff(diff);

        tracing::debug!(
            candidate = %candidate,
            best = %best_move,
            best_value,
            candidate_value,
            rating,
            nodes,
            "graded move"
        );

        Ok(MoveGrade {
            rating,
            best_move: Some(best_move),
            best_value,
            candidate_value,
            diff,
        })
    }
}

#[cfg(test)]
#[path = "grade_tests.rs"]
mod grade_tests;
