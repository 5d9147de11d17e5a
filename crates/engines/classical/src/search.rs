//! Minimax search with alpha-beta pruning and a capture-only extension.
//!
//! Written in negamax form: every score is from the point of view of the
//! side to move at that node, and a child's score is negated on the way up.

use chess_core::{after, legal_moves, BoardState, Color, Move};
use tracing::{debug, trace};

use crate::eval::evaluate;
use crate::exchange::{is_safe, see};
use crate::ordering::order_moves;

/// Score of delivering mate at the root. Mates found deeper score lower by
/// one per ply so the shortest mate is preferred.
pub const MATE_SCORE: i32 = 30_000;

/// Root moves scoring at least this are forced mates; searching further
/// cannot improve on them.
pub const MATE_FOUND: i32 = MATE_SCORE - 20;

const INFINITY: i32 = 999_999;

/// Searches `board` for `side` and returns the best move with its score.
///
/// Candidates are the legal moves passing [`is_safe`], or every legal move
/// when none does. `depth` counts the root ply; `quiescence_depth` bounds
/// the capture extension below the horizon.
pub fn pick_best_move(
    board: &BoardState,
    side: Color,
    depth: u8,
    quiescence_depth: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut root = board.clone();
    root.side_to_move = side;

    let legal = legal_moves(&root, side);
    if legal.is_empty() {
        debug!(%side, "no legal moves");
        return None;
    }

    let mut candidates: Vec<Move> = legal.iter().copied().filter(|&mv| is_safe(&root, mv)).collect();
    if candidates.is_empty() {
        debug!(%side, "no safe moves, considering all legal moves");
        candidates = legal;
    }
    order_moves(&root, &mut candidates);

    let mut searcher = Searcher {
        quiescence_depth,
        nodes: 0,
    };
    let mut best = candidates[0];
    let mut best_score = -INFINITY;

    for mv in candidates.iter().copied() {
        let child = after(&root, mv);
        let score = -searcher.negamax(&child, depth.saturating_sub(1), 1, -INFINITY, -best_score);
        trace!(%mv, score, "root move");

        if score > best_score {
            best_score = score;
            best = mv;
        }
        if score >= MATE_FOUND {
            break;
        }
    }

    *nodes += searcher.nodes;
    debug!(
        %side,
        depth,
        candidates = candidates.len(),
        best = %best,
        score = best_score,
        nodes = searcher.nodes,
        "search finished"
    );
    Some((best, best_score))
}

struct Searcher {
    quiescence_depth: u8,
    nodes: u64,
}

impl Searcher {
    fn negamax(&mut self, board: &BoardState, depth: u8, ply: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        let side = board.side_to_move;

        let mut moves = legal_moves(board, side);
        if moves.is_empty() {
            return if board.in_check(side) {
                -(MATE_SCORE - ply as i32)
            } else {
                0
            };
        }

        if depth == 0 {
            return self.quiescence(board, alpha, beta, self.quiescence_depth);
        }

        order_moves(board, &mut moves);

        let mut best = -INFINITY;
        for mv in moves {
            let child = after(board, mv);
            let score = -self.negamax(&child, depth - 1, ply + 1, -beta, -alpha);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Capture-only search with a stand-pat bound.
    fn quiescence(&mut self, board: &BoardState, mut alpha: i32, beta: i32, remaining: u8) -> i32 {
        self.nodes += 1;
        let side = board.side_to_move;
        let stand_pat = evaluate(board, side);
        if remaining == 0 {
            return stand_pat;
        }

        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        let mut captures: Vec<Move> = legal_moves(board, side)
            .into_iter()
            .filter(|&mv| !board.is_empty(mv.to) && see(board, mv) >= 0)
            .collect();
        order_moves(board, &mut captures);

        for mv in captures {
            let child = after(board, mv);
            let score = -self.quiescence(&child, -beta, -alpha, remaining - 1);
            if score >= beta {
                return beta;
            }
            alpha = alpha.max(score);
        }
        alpha
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
