use std::ops::{Deref, DerefMut};

use crate::bitboard::Bitboard;
use crate::error::FenError;
use crate::movegen::legal_moves;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Keys of the positions reached through `push`/`apply`, current last.
    history: Vec<u64>,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

/// A move applied to a position for as long as the guard lives.
///
/// Dropping the guard reverts the move, so every exit from the scope that
/// opened it (including `break` and early `return`) restores the position.
/// Deref gives access to the position with the move on the board.
pub struct ScopedMove<'a> {
    pos: &'a mut Position,
    mv: Move,
    undo: Option<Undo>,
}

impl ScopedMove<'_> {
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        &*self.pos
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        &mut *self.pos
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.pos.history.pop();
            self.pos.unmake_move(self.mv, undo);
        }
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: true,
                wq: true,
                bk: true,
                bq: true,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        };

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[48 + f] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[56 + f] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p.reset_history();
        p
    }

    /// Parses a Forsyth-Edwards Notation string.
    ///
    /// Only the board field is required; missing trailing fields default to
    /// `w - - 0 1`. Castling rights whose king or rook is not on its home
    /// square are dropped.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(FenError::Empty);
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyFields(parts.len()));
        }

        let board_part = parts[0];
        let stm_part = parts.get(1).copied().unwrap_or("w");
        let castle_part = parts.get(2).copied().unwrap_or("-");
        let ep_part = parts.get(3).copied().unwrap_or("-");
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = [None; 64];
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(FenError::BadRank(rank_str.to_string()));
                    }
                    file += d as i8;
                } else {
                    let pc = Piece::from_char(ch).ok_or(FenError::BadPiece(ch))?;
                    let s = sq(file, rank).ok_or_else(|| FenError::BadRank(rank_str.to_string()))?;
                    board[s as usize] = Some(pc);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRank(rank_str.to_string()));
                }
            }
            if file != 8 {
                return Err(FenError::BadRank(rank_str.to_string()));
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::BadCastling(castle_part.to_string())),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            let s = coord_to_sq(ep_part)
                .filter(|&s| rank_of(s) == 2 || rank_of(s) == 5)
                .ok_or_else(|| FenError::BadEnPassant(ep_part.to_string()))?;
            Some(s)
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| FenError::BadCounter(halfmove_part.to_string()))?;
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| FenError::BadCounter(fullmove_part.to_string()))?;

        let mut pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number: fullmove_number.max(1),
            history: Vec::new(),
        };
        pos.clean_castling_rights();
        pos.reset_history();
        Ok(pos)
    }

    /// Serializes the position back to FEN.
    ///
    /// The en-passant square is only written when an en-passant capture is
    /// actually legal, so positions that differ only in an unusable ep square
    /// print identically.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let s = (rank * 8 + file) as u8;
                match self.piece_at(s) {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let start = fen.len();
        if self.castling.wk {
            fen.push('K');
        }
        if self.castling.wq {
            fen.push('Q');
        }
        if self.castling.bk {
            fen.push('k');
        }
        if self.castling.bq {
            fen.push('q');
        }
        if fen.len() == start {
            fen.push('-');
        }

        fen.push(' ');
        match self.legal_en_passant() {
            Some(s) => fen.push_str(&sq_to_coord(s)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    fn legal_en_passant(&self) -> Option<u8> {
        let ep = self.en_passant?;
        legal_moves(self)
            .iter()
            .any(|m| m.is_en_passant)
            .then_some(ep)
    }

    fn clean_castling_rights(&mut self) {
        let has = |s: u8, color: Color, kind: PieceKind| {
            self.piece_at(s) == Some(Piece { color, kind })
        };
        let white_king = has(4, Color::White, PieceKind::King);
        let black_king = has(60, Color::Black, PieceKind::King);
        let rights = CastlingRights {
            wk: self.castling.wk && white_king && has(7, Color::White, PieceKind::Rook),
            wq: self.castling.wq && white_king && has(0, Color::White, PieceKind::Rook),
            bk: self.castling.bk && black_king && has(63, Color::Black, PieceKind::Rook),
            bq: self.castling.bq && black_king && has(56, Color::Black, PieceKind::Rook),
        };
        self.castling = rights;
    }

    fn reset_history(&mut self) {
        self.history.clear();
        self.history.push(self.key());
    }

    /// Zobrist key of the current placement, side to move, castling rights
    /// and en-passant file. The en-passant file only counts while a capture
    /// there is legal. Clocks are not part of the key.
    pub fn key(&self) -> u64 {
        let mut h = 0u64;
        for (i, pc) in self.board.iter().enumerate() {
            if let Some(pc) = pc {
                h ^= ZOBRIST.piece(*pc, i as u8);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.black_to_move();
        }
        let rights = [
            self.castling.wk,
            self.castling.wq,
            self.castling.bk,
            self.castling.bq,
        ];
        for (i, &on) in rights.iter().enumerate() {
            if on {
                h ^= ZOBRIST.castling(i);
            }
        }
        if let Some(ep) = self.legal_en_passant() {
            h ^= ZOBRIST.en_passant(file_of(ep) as u8);
        }
        h
    }

    /// How many times the current position occurs in the recorded history,
    /// the current occurrence included.
    pub fn repetition_count(&self) -> usize {
        match self.history.last() {
            Some(&key) => self.history.iter().filter(|&&k| k == key).count(),
            None => 1,
        }
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.board[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Squares holding pieces of the given color and kind.
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.squares_where(|pc| pc.color == color && pc.kind == kind)
    }

    /// Squares holding any piece of the given kind, either color.
    pub fn pieces_of_kind(&self, kind: PieceKind) -> Bitboard {
        self.squares_where(|pc| pc.kind == kind)
    }

    /// Squares occupied by the given color.
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.squares_where(|pc| pc.color == color)
    }

    fn squares_where(&self, pred: impl Fn(Piece) -> bool) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for (i, pc) in self.board.iter().enumerate() {
            if let Some(pc) = pc
                && pred(*pc)
            {
                bb.set(i as u8);
            }
        }
        bb
    }

    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        // Target attacked from below by white pawns, from above by black ones.
        let pawn_dirs: &[(i8, i8)] = match by {
            Color::White => &[(-1, -1), (1, -1)],
            Color::Black => &[(-1, 1), (1, 1)],
        };
        for (df, dr) in pawn_dirs {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::Pawn
            {
                return true;
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::Knight
            {
                return true;
            }
        }

        for (df, dr) in KING_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::King
            {
                return true;
            }
        }

        for (df, dr) in DIAGONALS {
            if self.slider_hits(tf, tr, df, dr, by, PieceKind::Bishop) {
                return true;
            }
        }
        for (df, dr) in ORTHOGONALS {
            if self.slider_hits(tf, tr, df, dr, by, PieceKind::Rook) {
                return true;
            }
        }

        false
    }

    fn slider_hits(&self, tf: i8, tr: i8, df: i8, dr: i8, by: Color, kind: PieceKind) -> bool {
        let mut f = tf + df;
        let mut r = tr + dr;
        while let Some(s) = sq(f, r) {
            if let Some(pc) = self.piece_at(s) {
                return pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen);
            }
            f += df;
            r += dr;
        }
        false
    }

    /// Applies `mv` and returns a guard that reverts it when dropped.
    ///
    /// The new position's key is recorded for repetition detection while the
    /// guard lives. `mv` must be legal in this position.
    pub fn apply(&mut self, mv: Move) -> ScopedMove<'_> {
        let undo = self.make_move(mv);
        let key = self.key();
        self.history.push(key);
        ScopedMove {
            pos: self,
            mv,
            undo: Some(undo),
        }
    }

    /// Applies `mv` permanently, recording the new position in the history.
    pub fn push(&mut self, mv: Move) {
        self.make_move(mv);
        let key = self.key();
        self.history.push(key);
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        // Halfmove clock reset on capture or pawn move
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let dir = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(to), rank_of(to) + dir) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        // Move piece (promotion handled after)
        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        if moved.kind == PieceKind::Pawn {
            let r = rank_of(to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                let promo = mv.promo.unwrap_or(PieceKind::Queen);
                self.set_piece(
                    to,
                    Some(Piece {
                        color: moved.color,
                        kind: promo,
                    }),
                );
            }
        }

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            // White: e1->g1 rook h1->f1, e1->c1 rook a1->d1
            // Black: e8->g8 rook h8->f8, e8->c8 rook a8->d8
            let squares = match (moved.color, from, to) {
                (Color::White, 4, 6) => Some((7, 5)),
                (Color::White, 4, 2) => Some((0, 3)),
                (Color::Black, 60, 62) => Some((63, 61)),
                (Color::Black, 60, 58) => Some((56, 59)),
                _ => None,
            };
            if let Some((rf, rt)) = squares
                && let Some(rook) = self.piece_at(rf)
            {
                self.set_piece(rf, None);
                self.set_piece(rt, Some(rook));
                rook_move = Some((rf, rt));
            }
        }

        // Update castling rights if king/rook moved or rook captured
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 0 {
                        self.castling.wq = false;
                    }
                    if from == 7 {
                        self.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 56 {
                        self.castling.bq = false;
                    }
                    if from == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            match cp.color {
                Color::White => {
                    if to == 0 {
                        self.castling.wq = false;
                    }
                    if to == 7 {
                        self.castling.wk = false;
                    }
                }
                Color::Black => {
                    if to == 56 {
                        self.castling.bq = false;
                    }
                    if to == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }

        // Double pawn push sets en-passant square
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                self.en_passant = sq(file_of(from), (fr + tr) / 2);
            }
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let from = mv.from;
        let to = mv.to;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moving piece goes back as it was, which also undoes promotion.
        self.set_piece(to, None);
        self.set_piece(from, Some(undo.moved_piece));

        if mv.is_en_passant {
            if let Some(cs) = undo.ep_captured_sq {
                self.set_piece(cs, undo.captured);
            }
        } else {
            self.set_piece(to, undo.captured);
        }
    }

    /// Returns the position with ranks flipped and colors swapped.
    ///
    /// Material, legal moves and outcomes of the mirror correspond one to one
    /// with the original, with the roles of White and Black exchanged.
    pub fn mirror(&self) -> Position {
        let mut board = [None; 64];
        for (i, pc) in self.board.iter().enumerate() {
            if let Some(pc) = pc {
                let flipped = (i as u8) ^ 56;
                board[flipped as usize] = Some(Piece {
                    color: pc.color.other(),
                    kind: pc.kind,
                });
            }
        }
        let mut p = Position {
            board,
            side_to_move: self.side_to_move.other(),
            castling: CastlingRights {
                wk: self.castling.bk,
                wq: self.castling.bq,
                bk: self.castling.wk,
                bq: self.castling.wq,
            },
            en_passant: self.en_passant.map(|s| s ^ 56),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
        };
        p.reset_history();
        p
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
