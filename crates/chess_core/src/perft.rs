//! Leaf-node counting for checking the move generator against known totals.

use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Number of leaf positions reachable in exactly `depth` plies.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    count(pos, depth, &mut layers)
}

/// Per-root-move leaf counts, sorted by coordinate text.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(pos, &mut roots);

    let mut layers = vec![Vec::with_capacity(64); depth as usize - 1];
    let mut out: Vec<(String, u64)> = roots
        .into_iter()
        .map(|mv| {
            let undo = pos.make_move(mv);
            let n = count(pos, depth - 1, &mut layers);
            pos.unmake_move(mv, undo);
            (mv.to_string(), n)
        })
        .collect();
    out.sort();
    out
}

// One reusable move buffer per remaining ply.
fn count(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
    let Some((buf, rest)) = layers.split_first_mut() else {
        return 1;
    };
    if depth == 0 {
        return 1;
    }

    legal_moves_into(pos, buf);
    if depth == 1 {
        return buf.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in buf.iter().copied() {
        let undo = pos.make_move(mv);
        nodes += count(pos, depth - 1, rest);
        pos.unmake_move(mv, undo);
    }
    nodes
}
