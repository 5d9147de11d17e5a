//! Move ordering heuristics. Ordering only decides which moves are searched
//! first; it never adds or removes moves.

use std::cmp::Reverse;

use chess_core::{after, BoardState, Move, PieceKind};

use crate::exchange::{is_safe, see};

pub const UNSAFE_PENALTY: i32 = -500_000;
pub const GOOD_CAPTURE_BONUS: i32 = 50_000;
pub const EVEN_CAPTURE_BONUS: i32 = 10_000;
pub const BAD_CAPTURE_PENALTY: i32 = -10_000;
pub const PROMOTION_BONUS: i32 = 90_000;
pub const CHECK_BONUS: i32 = 1_000;
pub const CENTER_BONUS: i32 = 50;

/// Heuristic priority of `mv`; higher is searched earlier.
pub fn score_move(board: &BoardState, mv: Move) -> i32 {
    let mover = match board.piece_at(mv.from) {
        Some(pc) => pc,
        None => return UNSAFE_PENALTY,
    };
    let mut score = 0;

    if !is_safe(board, mv) {
        score += UNSAFE_PENALTY;
    }

    if !board.is_empty(mv.to) {
        let gain = see(board, mv);
        score += match gain {
            g if g > 0 => GOOD_CAPTURE_BONUS + 10 * g,
            0 => EVEN_CAPTURE_BONUS,
            _ => BAD_CAPTURE_PENALTY,
        };
    }

    if mover.kind == PieceKind::Pawn && mv.to.row() == mover.color.promotion_row() {
        score += PROMOTION_BONUS;
    }

    if after(board, mv).in_check(mover.color.other()) {
        score += CHECK_BONUS;
    }

    if (3..=4).contains(&mv.to.row()) && (3..=4).contains(&mv.to.col()) {
        score += CENTER_BONUS;
    }

    score
}

/// Sorts `moves` by descending [`score_move`]. Equal scores keep their
/// generation order.
pub fn order_moves(board: &BoardState, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(score_move(board, mv)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
