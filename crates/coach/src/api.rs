//! Request and response bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub fen: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    pub fen: String,
    /// Coordinate (`e2e4`) or algebraic (`Nf3`) text
    pub user_move: String,
    /// Search depth in plies; the configured default when absent
    #[serde(default)]
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResponse {
    /// The move text exactly as submitted
    pub user_move: String,
    pub ai_move: Option<String>,
    pub fen_before: String,
    pub fen_after_user: String,
    pub fen_after_ai: String,
    pub game_over: bool,
    /// `"1-0"`, `"0-1"` or `"1/2-1/2"` once the game is over
    pub result: Option<String>,
    pub user_score: Option<u8>,
    pub hint_best_uci: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRequest {
    pub fen: String,
    #[serde(default)]
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResponse {
    pub best_uci: String,
}
