//! Move text in either notation.
//!
//! Parsing happens in two explicit stages. [`MoveText::classify`] decides the
//! notation from the text alone (coordinate pattern first, algebraic only on
//! mismatch); [`MoveText::resolve`] then matches the result against the legal
//! moves of a position.

use crate::board::Position;
use crate::error::MoveParseError;
use crate::san::San;
use crate::types::Move;
use crate::uci::{find_legal, parse_coordinate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveText {
    /// `e2e4`, `e7e8q`. Flags are unset until resolved.
    Coordinate(Move),
    /// `Nf3`, `exd5`, `O-O`.
    Algebraic(San),
}

impl MoveText {
    pub fn classify(text: &str) -> Result<MoveText, MoveParseError> {
        let s = strip_move_number(text.trim());
        if let Some(mv) = parse_coordinate(s) {
            return Ok(MoveText::Coordinate(mv));
        }
        San::parse(s)
            .map(MoveText::Algebraic)
            .ok_or_else(|| MoveParseError::Unparseable(text.to_string()))
    }

    pub fn resolve(&self, pos: &Position, text: &str) -> Result<Move, MoveParseError> {
        match self {
            MoveText::Coordinate(mv) => {
                find_legal(pos, *mv).ok_or_else(|| MoveParseError::Illegal(text.to_string()))
            }
            MoveText::Algebraic(san) => san.resolve(pos, text),
        }
    }
}

/// Parses user move text into a legal move of `pos`.
///
/// Accepts an optional move-number prefix (`"1. e4"`, `"12...Nf6"`).
pub fn parse_move_text(pos: &Position, text: &str) -> Result<Move, MoveParseError> {
    MoveText::classify(text)?.resolve(pos, text)
}

/// Drops a leading `<digits>.` (or `<digits>...`) and the whitespace after it.
fn strip_move_number(s: &str) -> &str {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return s;
    }
    let rest = &s[digits..];
    if !rest.starts_with('.') {
        return s;
    }
    rest.trim_start_matches('.').trim_start()
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
