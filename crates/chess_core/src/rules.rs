//! Move legality and the end-of-game state machine.
//!
//! Legality is checked in two layers. The piece rules ([`is_legal`],
//! [`piece_allows`]) answer whether a piece may travel from one square to
//! another. The king-safety filter ([`leaves_king_in_check`]) then rejects
//! moves that expose the mover's own king. A move passing both is fully
//! legal ([`is_fully_legal`]).

use crate::attacks::{KNIGHT_DELTAS, path_clear};
use crate::board::BoardState;
use crate::execute::play_trial;
use crate::movegen::pseudo_moves;
use crate::types::*;

/// Piece-rule legality for the side recorded as to move: the source must
/// hold one of its pieces and the piece rule must accept the destination.
pub fn is_legal(board: &BoardState, from: Square, to: Square) -> bool {
    piece_allows(board, from, to, board.side_to_move)
}

/// Piece-rule legality with the moving color given explicitly.
pub fn piece_allows(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    let piece = match board.piece_at(from) {
        Some(pc) if pc.color == mover => pc,
        _ => return false,
    };
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_rule(board, from, to, mover),
        PieceKind::Knight => knight_rule(board, from, to, mover),
        PieceKind::Bishop => bishop_rule(board, from, to, mover),
        PieceKind::Rook => rook_rule(board, from, to, mover),
        PieceKind::Queen => queen_rule(board, from, to, mover),
        PieceKind::King => king_rule(board, from, to, mover),
    }
}

/// Destination is empty or holds an enemy piece.
fn enterable(board: &BoardState, to: Square, mover: Color) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(pc) => pc.color != mover,
    }
}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

fn pawn_rule(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    let dir = mover.forward();
    let (dr, dc) = deltas(from, to);

    if dc == 0 {
        if dr == dir {
            return board.is_empty(to);
        }
        if dr == 2 * dir && from.row() == mover.pawn_row() {
            let mid = from.offset(dir, 0);
            return mid.is_some_and(|m| board.is_empty(m)) && board.is_empty(to);
        }
        return false;
    }

    if dc.abs() != 1 || dr != dir {
        return false;
    }
    match board.piece_at(to) {
        Some(pc) => pc.color != mover,
        None => {
            // En passant: the target must be the recorded square and an enemy
            // pawn must stand beside the capturing pawn.
            board.en_passant == Some(to)
                && matches!(
                    board.piece_at(Square::at(from.row(), to.col())),
                    Some(pc) if pc.color != mover && pc.kind == PieceKind::Pawn
                )
        }
    }
}

fn knight_rule(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    KNIGHT_DELTAS.contains(&deltas(from, to)) && enterable(board, to, mover)
}

fn rook_rule(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    let (dr, dc) = deltas(from, to);
    (dr == 0 || dc == 0) && path_clear(board, from, to) && enterable(board, to, mover)
}

fn bishop_rule(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    let (dr, dc) = deltas(from, to);
    dr.abs() == dc.abs() && path_clear(board, from, to) && enterable(board, to, mover)
}

fn queen_rule(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    let (dr, dc) = deltas(from, to);
    if dr.abs() == dc.abs() {
        bishop_rule(board, from, to, mover)
    } else if dr == 0 || dc == 0 {
        rook_rule(board, from, to, mover)
    } else {
        false
    }
}

fn king_rule(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    if !enterable(board, to, mover) {
        return false;
    }
    let (dr, dc) = deltas(from, to);

    if dr.abs() <= 1 && dc.abs() <= 1 {
        // The king must not shield its own destination, so test the attack
        // with the source square vacated.
        let mut scratch = board.clone();
        scratch.set_piece(from, None);
        return !scratch.is_square_attacked(to, mover.other());
    }

    if dr == 0 && dc.abs() == 2 {
        return castle_rule(board, from, to, mover);
    }
    false
}

fn castle_rule(board: &BoardState, from: Square, to: Square, mover: Color) -> bool {
    let row = mover.back_row();
    if from != Square::at(row, 4) {
        return false;
    }
    let (allowed, rook_col, between, king_path) = match to.col() {
        6 => (board.castling.kingside(mover), 7u8, &[5u8, 6][..], [4u8, 5, 6]),
        2 => (board.castling.queenside(mover), 0u8, &[1u8, 2, 3][..], [4u8, 3, 2]),
        _ => return false,
    };
    if !allowed {
        return false;
    }
    let rook = Piece::new(mover, PieceKind::Rook);
    if board.piece_at(Square::at(row, rook_col)) != Some(rook) {
        return false;
    }
    if between.iter().any(|&c| !board.is_empty(Square::at(row, c))) {
        return false;
    }
    let enemy = mover.other();
    king_path
        .iter()
        .all(|&c| !board.is_square_attacked(Square::at(row, c), enemy))
}

/// Trial-applies `mv` on a scratch copy and reports whether `mover`'s king
/// is attacked afterwards. The board itself is never touched.
pub fn leaves_king_in_check(board: &BoardState, mv: Move, mover: Color) -> bool {
    let mut scratch = board.clone();
    play_trial(&mut scratch, mv);
    scratch.in_check(mover)
}

/// Piece rule for the side to move plus the king-safety filter.
pub fn is_fully_legal(board: &BoardState, mv: Move) -> bool {
    is_legal(board, mv.from, mv.to) && !leaves_king_in_check(board, mv, board.side_to_move)
}

pub fn is_in_check(board: &BoardState, side: Color) -> bool {
    board.in_check(side)
}

pub fn has_any_legal_move(board: &BoardState, side: Color) -> bool {
    pseudo_moves(board, side)
        .into_iter()
        .any(|mv| !leaves_king_in_check(board, mv, side))
}

pub fn is_checkmate(board: &BoardState, side: Color) -> bool {
    is_in_check(board, side) && !has_any_legal_move(board, side)
}

pub fn is_stalemate(board: &BoardState, side: Color) -> bool {
    !is_in_check(board, side) && !has_any_legal_move(board, side)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
