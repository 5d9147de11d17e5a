//! Attack detection.
//!
//! Everything here is a pure function of the board and the attacking color;
//! the side to move recorded on the board is never consulted. A square counts
//! as attacked when a piece of the attacking color could capture an enemy
//! piece standing on it, whatever actually occupies the square.

use crate::board::BoardState;
use crate::types::*;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True when every square strictly between `from` and `to` is empty.
/// The squares must share a rank, file or diagonal.
pub fn path_clear(board: &BoardState, from: Square, to: Square) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).signum();
    let dc = (to.col() as i8 - from.col() as i8).signum();
    let mut cur = from.offset(dr, dc);
    while let Some(s) = cur {
        if s == to {
            return true;
        }
        if !board.is_empty(s) {
            return false;
        }
        cur = s.offset(dr, dc);
    }
    false
}

/// Whether `piece` standing on `from` attacks `target`.
pub fn piece_attacks(board: &BoardState, piece: Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }
    let dr = target.row() as i8 - from.row() as i8;
    let dc = target.col() as i8 - from.col() as i8;
    match piece.kind {
        PieceKind::Pawn => dr == piece.color.forward() && dc.abs() == 1,
        PieceKind::Knight => KNIGHT_DELTAS.contains(&(dr, dc)),
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
        PieceKind::Rook => (dr == 0 || dc == 0) && path_clear(board, from, target),
        PieceKind::Bishop => dr.abs() == dc.abs() && path_clear(board, from, target),
        PieceKind::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && path_clear(board, from, target)
        }
    }
}

/// Squares holding pieces of `by` that attack `target`.
pub fn attackers(board: &BoardState, target: Square, by: Color) -> impl Iterator<Item = Square> + '_ {
    board
        .pieces(by)
        .filter(move |&(s, pc)| piece_attacks(board, pc, s, target))
        .map(|(s, _)| s)
}

impl BoardState {
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let is = |s: Square, kinds: &[PieceKind]| {
            matches!(self.piece_at(s), Some(pc) if pc.color == by && kinds.contains(&pc.kind))
        };

        // A pawn of `by` attacks from one row behind the target.
        let back = -by.forward();
        for dc in [-1, 1] {
            if let Some(s) = target.offset(back, dc)
                && is(s, &[PieceKind::Pawn])
            {
                return true;
            }
        }

        for (dr, dc) in KNIGHT_DELTAS {
            if let Some(s) = target.offset(dr, dc)
                && is(s, &[PieceKind::Knight])
            {
                return true;
            }
        }

        for (dr, dc) in KING_DELTAS {
            if let Some(s) = target.offset(dr, dc)
                && is(s, &[PieceKind::King])
            {
                return true;
            }
        }

        let rays = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, sliders) in rays {
            for &(dr, dc) in dirs.iter() {
                let mut cur = target.offset(dr, dc);
                while let Some(s) = cur {
                    if !self.is_empty(s) {
                        if is(s, &sliders) {
                            return true;
                        }
                        break;
                    }
                    cur = s.offset(dr, dc);
                }
            }
        }

        false
    }

    /// Whether the king of `c` is attacked. A missing king is reported as not
    /// in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(k) => self.is_square_attacked(k, c.other()),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
