use super::*;

fn uci_set(pos: &Position) -> Vec<String> {
    let mut v: Vec<String> = legal_moves(pos).iter().map(|m| m.to_string()).collect();
    v.sort();
    v
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_castling_needs_rook_on_corner() {
    // Castling rights claimed but the h1 rook is gone: only queen side remains.
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1").unwrap();
    // Force the stale right back on to bypass FEN cleaning.
    pos.castling.wk = true;
    let moves = uci_set(&pos);
    assert!(moves.contains(&"e1c1".to_string()));
    assert!(!moves.contains(&"e1g1".to_string()));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Black rook on f8 covers f1.
    let pos = Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(!uci_set(&pos).contains(&"e1g1".to_string()));
}

#[test]
fn test_promotions_generate_four_moves() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let promos: Vec<String> = uci_set(&pos)
        .into_iter()
        .filter(|m| m.starts_with("e7e8"))
        .collect();
    assert_eq!(promos, vec!["e7e8b", "e7e8n", "e7e8q", "e7e8r"]);
}

#[test]
fn test_en_passant_generated() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let moves = legal_moves(&pos);
    let ep = moves.iter().find(|m| m.to_string() == "e5f6").unwrap();
    assert!(ep.is_en_passant);
}

#[test]
fn test_en_passant_needs_a_victim() {
    // The recorded square has no double-pushed pawn in front of it.
    for fen in [
        "4k3/8/8/8/8/8/3P4/4K3 w - e3 0 1",
        "4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1",
        "4k3/8/8/3P4/8/8/8/4K3 w - e6 0 1",
        "4k3/8/8/8/3p4/8/8/4K3 b - e6 0 1",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        assert!(
            legal_moves(&pos).iter().all(|m| !m.is_en_passant),
            "{fen}: {:?}",
            uci_set(&pos)
        );
    }

    let pos = Position::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1").unwrap();
    assert!(!uci_set(&pos).contains(&"d2e3".to_string()));
}

#[test]
fn test_black_en_passant_generated() {
    let pos = Position::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").unwrap();
    let ep = legal_moves(&pos)
        .into_iter()
        .find(|m| m.to_string() == "d4e3")
        .unwrap();
    assert!(ep.is_en_passant);
}

#[test]
fn test_has_legal_move_on_mate() {
    let mated =
        Position::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    assert!(!has_legal_move(&mated));
    assert!(has_legal_move(&Position::startpos()));
}
