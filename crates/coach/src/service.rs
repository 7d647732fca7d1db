//! The coaching operations.

use chess_core::{has_legal_move, parse_move_text, Engine, Position, START_FEN};
use minimax_engine::MinimaxEngine;
use tracing::{info, warn};

use crate::api::*;
use crate::config::CoachConfig;
use crate::error::CoachError;

/// Stateless apart from the engine's tie-breaking RNG: every request carries
/// its own position.
#[derive(Debug, Clone)]
pub struct Coach {
    engine: MinimaxEngine,
    config: CoachConfig,
}

impl Coach {
    pub fn new(config: CoachConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => MinimaxEngine::with_seed(seed),
            None => MinimaxEngine::new(),
        };
        Self { engine, config }
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn new_game(&mut self) -> NewGameResponse {
        self.engine.new_game();
        info!("new game");
        NewGameResponse {
            fen: START_FEN.to_string(),
        }
    }

    /// Grades the submitted move, plays it and answers with the engine's
    /// reply unless the move ended the game.
    pub fn play(&mut self, req: &PlayRequest) -> Result<PlayResponse, CoachError> {
        let depth = req.depth.unwrap_or(self.config.default_depth);
        let mut pos = parse_position(&req.fen)?;
        let fen_before = pos.to_fen();

        if !has_legal_move(&pos) {
            info!(fen = %fen_before, result = pos.result(), "play on a finished game");
            return Ok(PlayResponse {
                user_move: req.user_move.clone(),
                ai_move: None,
                fen_after_user: fen_before.clone(),
                fen_after_ai: fen_before.clone(),
                fen_before,
                game_over: true,
                result: Some(pos.result().to_string()),
                user_score: None,
                hint_best_uci: None,
            });
        }

        let user_mv = parse_move_text(&pos, &req.user_move).map_err(|err| {
            warn!(user_move = %req.user_move, error = %err, "rejected move");
            CoachError::from(err)
        })?;

        // Graded before it is applied.
        let grade = self.engine.grade_move(&pos, user_mv, depth)?;
        info!(
            user_move = %user_mv,
            rating = grade.rating,
            best = %grade.hint_uci(),
            depth,
            "graded user move"
        );

        pos.push(user_mv);
        let fen_after_user = pos.to_fen();

        let ai_move = if pos.is_game_over() {
            None
        } else {
            self.engine
                .select_best_move(&pos, depth)
                .best_move
                .map(|(mv, _)| mv)
        };
        if let Some(mv) = ai_move {
            pos.push(mv);
            info!(ai_move = %mv, depth, "engine reply");
        }
        let fen_after_ai = pos.to_fen();

        let outcome = pos.outcome();
        if let Some(outcome) = outcome {
            info!(result = outcome.result(), termination = ?outcome.termination, "game over");
        }

        Ok(PlayResponse {
            user_move: req.user_move.clone(),
            ai_move: ai_move.map(|mv| mv.to_string()),
            fen_before,
            fen_after_user,
            fen_after_ai,
            game_over: outcome.is_some(),
            result: outcome.map(|o| o.result().to_string()),
            user_score: Some(grade.rating),
            hint_best_uci: Some(grade.hint_uci()),
        })
    }

    /// The engine's choice for the side to move.
    pub fn hint(&mut self, req: &HintRequest) -> Result<HintResponse, CoachError> {
        let depth = req.depth.unwrap_or(self.config.default_depth);
        let pos = parse_position(&req.fen)?;

        match self.engine.select_best_move(&pos, depth).best_move {
            Some((mv, value)) => {
                info!(best = %mv, value, depth, "hint");
                Ok(HintResponse {
                    best_uci: mv.to_string(),
                })
            }
            None => {
                warn!(fen = %req.fen, "hint requested with no legal moves");
                Err(CoachError::NoLegalMoves)
            }
        }
    }
}

impl Default for Coach {
    fn default() -> Self {
        Self::new(CoachConfig::default())
    }
}

fn parse_position(fen: &str) -> Result<Position, CoachError> {
    Position::from_fen(fen).map_err(|err| {
        warn!(fen, error = %err, "rejected position");
        CoachError::from(err)
    })
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
