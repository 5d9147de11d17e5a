//! Attacker counting, simplified static exchange and the move-safety test.

use chess_core::{after, attackers, BoardState, Color, Move, Square};

/// Pieces of `by` able to capture on `target` without exposing their own
/// king. Works for defenders too: an own piece on `target` is treated as if
/// it could be recaptured onto.
pub fn count_attackers(board: &BoardState, target: Square, by: Color) -> usize {
    attackers(board, target, by)
        .filter(|&from| {
            let mut scratch = board.clone();
            let piece = scratch.piece_at(from);
            scratch.set_piece(target, piece);
            scratch.set_piece(from, None);
            !scratch.in_check(by)
        })
        .count()
}

/// Single-recapture exchange estimate for `mv`: the victim's value, minus
/// the mover's value when the opponent can take back on the destination.
/// Zero when either square is empty.
pub fn see(board: &BoardState, mv: Move) -> i32 {
    let (mover, victim) = match (board.piece_at(mv.from), board.piece_at(mv.to)) {
        (Some(m), Some(v)) => (m, v),
        _ => return 0,
    };
    let mut gain = victim.value();
    let trial = after(board, mv);
    if count_attackers(&trial, mv.to, mover.color.other()) > 0 {
        gain -= mover.value();
    }
    gain
}

/// Whether `mv` avoids leaving material en prise.
///
/// Captures are safe when they take something at least as valuable, when
/// nothing can recapture, or when the exchange does not lose material. Quiet
/// moves are unsafe when the destination is attacked more often than it is
/// defended, and a piece worth more than a minor piece also needs strictly
/// more defenders than attackers.
pub fn is_safe(board: &BoardState, mv: Move) -> bool {
    let mover = match board.piece_at(mv.from) {
        Some(pc) => pc,
        None => return false,
    };
    let trial = after(board, mv);
    if trial.in_check(mover.color) {
        return false;
    }

    let attackers = count_attackers(&trial, mv.to, mover.color.other());
    let defenders = count_attackers(&trial, mv.to, mover.color);

    match board.piece_at(mv.to) {
        Some(victim) => victim.value() >= mover.value() || attackers == 0 || see(board, mv) >= 0,
        None => {
            if attackers > defenders {
                return false;
            }
            !(attackers > 0 && mover.value() > 300 && defenders <= attackers)
        }
    }
}

#[cfg(test)]
#[path = "exchange_tests.rs"]
mod exchange_tests;
