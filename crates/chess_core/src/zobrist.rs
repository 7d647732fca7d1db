//! Hash keys for repetition detection.
//!
//! Every feature of a position that the repetition rule cares about gets one
//! slot in a flat table: 768 (piece, square) slots, then Black to move, then
//! the four castling rights, then the eight en-passant files.
//! [`Position::key`](crate::Position::key) XORs the slots that are present.

use crate::types::Piece;

const PIECE_SLOTS: usize = 2 * 6 * 64;
const BLACK_SLOT: usize = PIECE_SLOTS;
const CASTLING_SLOT: usize = BLACK_SLOT + 1;
const EN_PASSANT_SLOT: usize = CASTLING_SLOT + 4;
const SLOTS: usize = EN_PASSANT_SLOT + 8;

/// splitmix64 finaliser over the slot index, so each slot is independent of
/// the order the table is filled in.
const fn mix(slot: u64) -> u64 {
    let mut z = slot.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub struct HashKeys([u64; SLOTS]);

impl HashKeys {
    const fn build() -> Self {
        let mut keys = [0u64; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            keys[i] = mix(i as u64);
            i += 1;
        }
        HashKeys(keys)
    }

    #[inline]
    pub fn piece(&self, piece: Piece, sq: u8) -> u64 {
        self.0[(piece.color.idx() * 6 + piece.kind.idx()) * 64 + sq as usize]
    }

    #[inline]
    pub fn black_to_move(&self) -> u64 {
        self.0[BLACK_SLOT]
    }

    /// Rights in the order white short, white long, black short, black long.
    #[inline]
    pub fn castling(&self, right: usize) -> u64 {
        self.0[CASTLING_SLOT + right]
    }

    #[inline]
    pub fn en_passant(&self, file: u8) -> u64 {
        self.0[EN_PASSANT_SLOT + file as usize]
    }

    #[cfg(test)]
    fn slots(&self) -> &[u64] {
        &self.0
    }
}

pub static ZOBRIST: HashKeys = HashKeys::build();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
