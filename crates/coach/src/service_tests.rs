use super::*;
use chess_core::FenError;

const SCHOLAR: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";
const MATED: &str = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";
const STALEMATE: &str = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1";

fn coach() -> Coach {
    Coach::new(CoachConfig {
        seed: Some(17),
        ..Default::default()
    })
}

fn play(fen: &str, user_move: &str, depth: u8) -> Result<PlayResponse, CoachError> {
    coach().play(&PlayRequest {
        fen: fen.to_string(),
        user_move: user_move.to_string(),
        depth: Some(depth),
    })
}

#[test]
fn test_new_game_is_start_position() {
    assert_eq!(coach().new_game().fen, START_FEN);
}

#[test]
fn test_bad_fen() {
    let err = play("not a fen", "e4", 1).unwrap_err();
    assert_eq!(err, CoachError::InvalidPosition(FenError::RankCount(1)));
    assert!(err.is_client_error());
    assert_eq!(err.kind(), "invalid_position");
}

#[test]
fn test_unparseable_move() {
    let err = play(START_FEN, "hello", 1).unwrap_err();
    assert_eq!(err, CoachError::InvalidMoveFormat("hello".to_string()));
    assert_eq!(err.kind(), "invalid_move_format");
}

#[test]
fn test_illegal_move() {
    for text in ["e2e5", "Nf6", "O-O"] {
        let err = play(START_FEN, text, 1).unwrap_err();
        assert_eq!(err, CoachError::IllegalMove(text.to_string()), "{text}");
        assert!(err.is_client_error());
    }
}

#[test]
fn test_ambiguous_move_is_illegal() {
    // Both knights can reach d2.
    let err = play("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "Nd2", 1).unwrap_err();
    assert_eq!(err.kind(), "illegal_move");
}

#[test]
fn test_mating_move_ends_game() {
    let resp = play(SCHOLAR, "Qxf7#", 2).unwrap();
    assert_eq!(resp.user_move, "Qxf7#");
    assert_eq!(resp.ai_move, None);
    assert!(resp.game_over);
    assert_eq!(resp.result.as_deref(), Some("1-0"));
    assert_eq!(resp.fen_after_user, MATED);
    assert_eq!(resp.fen_after_ai, resp.fen_after_user);
    assert_eq!(resp.user_score, Some(10));
    assert!(resp.hint_best_uci.is_some());
}

#[test]
fn test_play_on_finished_game() {
    for (fen, result) in [(MATED, "1-0"), (STALEMATE, "1/2-1/2")] {
        let resp = play(fen, "e2e4", 2).unwrap();
        assert!(resp.game_over);
        assert_eq!(resp.ai_move, None);
        assert_eq!(resp.fen_before, fen);
        assert_eq!(resp.fen_after_user, fen);
        assert_eq!(resp.fen_after_ai, fen);
        assert_eq!(resp.result.as_deref(), Some(result));
        assert_eq!(resp.user_score, None);
        assert_eq!(resp.hint_best_uci, None);
    }
}

#[test]
fn test_hint_without_legal_moves() {
    for fen in [MATED, STALEMATE] {
        let err = coach()
            .hint(&HintRequest {
                fen: fen.to_string(),
                depth: Some(2),
            })
            .unwrap_err();
        assert_eq!(err, CoachError::NoLegalMoves);
        assert!(err.is_client_error());
    }
}

#[test]
fn test_default_depth_from_config() {
    let mut coach = Coach::new(CoachConfig {
        default_depth: 1,
        seed: Some(4),
        ..Default::default()
    });
    assert_eq!(coach.config().default_depth, 1);
    let resp = coach
        .hint(&HintRequest {
            fen: START_FEN.to_string(),
            depth: None,
        })
        .unwrap();
    assert_eq!(resp.best_uci.len(), 4);
}
