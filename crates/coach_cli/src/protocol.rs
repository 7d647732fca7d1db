//! One JSON request per line in, one JSON response per line out.

use coach::{Coach, CoachError, HintRequest, PlayRequest};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    NewGame,
    Play(PlayRequest),
    Hint(HintRequest),
}

/// Answers a single request line. Failures become `{"error", "detail"}`
/// objects so the session keeps going.
pub fn handle_line(coach: &mut Coach, line: &str) -> Value {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "malformed request");
            return error_body("bad_request", &err.to_string());
        }
    };

    let response = match request {
        Request::NewGame => serde_json::to_value(coach.new_game()),
        Request::Play(req) => match coach.play(&req) {
            Ok(resp) => serde_json::to_value(resp),
            Err(err) => return coach_error(&err),
        },
        Request::Hint(req) => match coach.hint(&req) {
            Ok(resp) => serde_json::to_value(resp),
            Err(err) => return coach_error(&err),
        },
    };

    response.unwrap_or_else(|err| error_body("internal", &err.to_string()))
}

fn coach_error(err: &CoachError) -> Value {
    error_body(err.kind(), &err.to_string())
}

fn error_body(kind: &str, detail: &str) -> Value {
    json!({ "error": kind, "detail": detail })
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
