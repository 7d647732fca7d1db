//! Full play/hint flows and the JSON shapes of requests and responses.

use chess_core::{parse_uci_move, Position, START_FEN};
use coach::{Coach, CoachConfig, HintRequest, PlayRequest, PlayResponse};
use serde_json::json;

fn coach(seed: u64) -> Coach {
    Coach::new(CoachConfig {
        seed: Some(seed),
        ..Default::default()
    })
}

#[test]
fn test_opening_move_gets_reply() {
    let mut coach = coach(1);
    let fen = coach.new_game().fen;
    let resp = coach
        .play(&PlayRequest {
            fen: fen.clone(),
            user_move: "1. e4".to_string(),
            depth: Some(2),
        })
        .unwrap();

    assert_eq!(resp.user_move, "1. e4");
    assert_eq!(resp.fen_before, START_FEN);
    assert_eq!(
        resp.fen_after_user,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
    assert!(!resp.game_over);
    assert_eq!(resp.result, None);
    assert_eq!(resp.user_score, Some(10));

    // The reply is a legal Black move from the position after e4.
    let after_user = Position::from_fen(&resp.fen_after_user).unwrap();
    let ai = resp.ai_move.as_deref().unwrap();
    let ai_mv = parse_uci_move(&after_user, ai).unwrap();
    let mut expected = after_user.clone();
    expected.push(ai_mv);
    assert_eq!(resp.fen_after_ai, expected.to_fen());
}

#[test]
fn test_move_number_prefix_and_coordinates_agree() {
    let request = |text: &str| PlayRequest {
        fen: START_FEN.to_string(),
        user_move: text.to_string(),
        depth: Some(1),
    };
    let a = coach(5).play(&request("1. e4")).unwrap();
    let b = coach(5).play(&request("e4")).unwrap();
    let c = coach(5).play(&request("e2e4")).unwrap();
    assert_eq!(a.fen_after_user, b.fen_after_user);
    assert_eq!(b.fen_after_user, c.fen_after_user);
    assert_eq!(b.ai_move, c.ai_move);
}

#[test]
fn test_blunder_scored_low_with_hint() {
    let resp = coach(2)
        .play(&PlayRequest {
            fen: "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
                .to_string(),
            user_move: "a3".to_string(),
            depth: Some(2),
        })
        .unwrap();
    assert_eq!(resp.user_score, Some(2));
    let hint = resp.hint_best_uci.unwrap();
    assert!(hint == "h5f7" || hint == "c4f7", "unexpected hint {hint}");
    // The engine takes the hanging queen.
    assert_eq!(resp.ai_move.as_deref(), Some("f6h5"));
}

#[test]
fn test_hint() {
    let resp = coach(3)
        .hint(&HintRequest {
            fen: "r5k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1".to_string(),
            depth: Some(2),
        })
        .unwrap();
    assert_eq!(resp.best_uci, "a1a8");
}

#[test]
fn test_request_json_defaults_depth() {
    let req: PlayRequest =
        serde_json::from_value(json!({"fen": START_FEN, "user_move": "Nf3"})).unwrap();
    assert_eq!(req.depth, None);

    let req: HintRequest = serde_json::from_value(json!({"fen": START_FEN, "depth": 4})).unwrap();
    assert_eq!(req.depth, Some(4));
}

#[test]
fn test_response_json_shape() {
    let resp = PlayResponse {
        user_move: "Qxf7#".to_string(),
        ai_move: None,
        fen_before: "a".to_string(),
        fen_after_user: "b".to_string(),
        fen_after_ai: "b".to_string(),
        game_over: true,
        result: Some("1-0".to_string()),
        user_score: Some(10),
        hint_best_uci: Some("h5f7".to_string()),
    };
    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        json!({
            "user_move": "Qxf7#",
            "ai_move": null,
            "fen_before": "a",
            "fen_after_user": "b",
            "fen_after_ai": "b",
            "game_over": true,
            "result": "1-0",
            "user_score": 10,
            "hint_best_uci": "h5f7",
        })
    );
}
