//! Game termination: checkmate, stalemate and the automatic draws.

use chess_core::{legal_moves, parse_uci_move, Color, Position, Termination};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn termination(fen: &str) -> Option<Termination> {
    pos(fen).outcome().map(|o| o.termination)
}

// =============================================================================
// Checkmate and stalemate
// =============================================================================

#[test]
fn test_checkmate_winner() {
    let p = pos("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    let outcome = p.outcome().unwrap();
    assert_eq!(outcome.termination, Termination::Checkmate);
    assert_eq!(outcome.winner, Some(Color::White));
    assert_eq!(p.result(), "1-0");
    assert!(p.is_game_over());
}

#[test]
fn test_check_is_not_checkmate() {
    let p = pos("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(p.in_check(Color::Black));
    assert_eq!(p.outcome(), None);
    assert_eq!(p.result(), "*");
}

#[test]
fn test_stalemate_king_in_corner() {
    let p = pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&p).is_empty());
    assert!(!p.in_check(Color::Black));
    assert_eq!(termination("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1"), Some(Termination::Stalemate));
    assert_eq!(p.result(), "1/2-1/2");
}

#[test]
fn test_stalemate_king_and_pawn() {
    assert_eq!(
        termination("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1"),
        Some(Termination::Stalemate)
    );
}

#[test]
fn test_checkmate_beats_seventy_five_move_rule() {
    assert_eq!(
        termination("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 150 4"),
        Some(Termination::Checkmate)
    );
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn test_insufficient_material_draws() {
    for fen in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
        // Bishops on same-colored squares.
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
    ] {
        assert_eq!(
            termination(fen),
            Some(Termination::InsufficientMaterial),
            "{fen}"
        );
        assert_eq!(pos(fen).result(), "1/2-1/2");
    }
}

#[test]
fn test_sufficient_material() {
    for fen in [
        // Bishops on opposite colors.
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
        // The bishop can block its own king, so the knight could mate.
        "8/8/4b3/4k3/8/4KN2/8/8 w - - 0 1",
    ] {
        assert!(!pos(fen).is_insufficient_material(), "{fen}");
        assert_eq!(termination(fen), None, "{fen}");
    }
}

#[test]
fn test_one_side_insufficient() {
    let p = pos("8/8/8/4k3/8/4KN2/8/7r w - - 0 1");
    assert!(!p.has_insufficient_material(Color::White));
    assert!(!p.has_insufficient_material(Color::Black));

    let p = pos("8/8/8/4k3/8/4K3/8/7r w - - 0 1");
    assert!(p.has_insufficient_material(Color::White));
    assert!(!p.has_insufficient_material(Color::Black));
}

// =============================================================================
// Seventy-five-move rule
// =============================================================================

#[test]
fn test_seventy_five_move_rule() {
    assert_eq!(
        termination("8/8/8/4k3/8/4K3/4P3/8 w - - 150 90"),
        Some(Termination::SeventyFiveMoves)
    );
    assert_eq!(termination("8/8/8/4k3/8/4K3/4P3/8 w - - 149 90"), None);
    // The fifty-move rule needs a claim and does not end the game.
    assert_eq!(termination("8/8/8/4k3/8/4K3/4P3/8 w - - 100 60"), None);
}

// =============================================================================
// Repetition
// =============================================================================

fn shuffle_knights(p: &mut Position, cycles: usize) {
    for _ in 0..cycles {
        for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = parse_uci_move(p, text).unwrap();
            p.push(mv);
        }
    }
}

#[test]
fn test_fivefold_repetition() {
    let mut p = Position::startpos();
    shuffle_knights(&mut p, 3);
    assert_eq!(p.repetition_count(), 4);
    assert_eq!(p.outcome(), None);

    shuffle_knights(&mut p, 1);
    assert_eq!(p.repetition_count(), 5);
    assert_eq!(
        p.outcome().map(|o| o.termination),
        Some(Termination::FivefoldRepetition)
    );
    assert_eq!(p.result(), "1/2-1/2");
}

#[test]
fn test_repetition_history_starts_at_fen() {
    // A parsed position has no earlier history to repeat.
    let mut p = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    assert_eq!(p.repetition_count(), 1);
    for text in ["f3g1", "c6b8", "g1f3", "b8c6"] {
        let mv = parse_uci_move(&p, text).unwrap();
        p.push(mv);
    }
    assert_eq!(p.repetition_count(), 2);
    assert_eq!(p.halfmove_clock, 6);
}
