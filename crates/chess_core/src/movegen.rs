use crate::attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::board::BoardState;
use crate::rules::{leaves_king_in_check, piece_allows};
use crate::types::*;

/// Generate all legal moves for `side`, returning a freshly allocated vector.
pub fn legal_moves(board: &BoardState, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal moves for `side` into the provided buffer, reusing it
/// across calls.
pub fn legal_moves_into(board: &BoardState, side: Color, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves_into(board, side, out);
    out.retain(|&mv| !leaves_king_in_check(board, mv, side));
}

/// Moves accepted by the piece rules, before the king-safety filter.
pub fn pseudo_moves(board: &BoardState, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves_into(board, side, &mut out);
    out
}

fn pseudo_moves_into(board: &BoardState, side: Color, out: &mut Vec<Move>) {
    let mut targets = Vec::with_capacity(28);
    for (from, pc) in board.pieces(side) {
        targets.clear();
        candidate_targets(board, from, pc, &mut targets);
        out.extend(
            targets
                .iter()
                .filter(|&&to| piece_allows(board, from, to, side))
                .map(|&to| Move::new(from, to)),
        );
    }
}

/// Geometric destinations for a piece. The piece rules make the final call,
/// so this only has to be a superset of the legal destinations.
fn candidate_targets(board: &BoardState, from: Square, pc: Piece, out: &mut Vec<Square>) {
    match pc.kind {
        PieceKind::Pawn => {
            let dir = pc.color.forward();
            for (dr, dc) in [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)] {
                out.extend(from.offset(dr, dc));
            }
        }
        PieceKind::Knight => steps(from, &KNIGHT_DELTAS, out),
        PieceKind::King => {
            steps(from, &KING_DELTAS, out);
            out.extend(from.offset(0, 2));
            out.extend(from.offset(0, -2));
        }
        PieceKind::Bishop => rays(board, from, &DIAGONALS, out),
        PieceKind::Rook => rays(board, from, &ORTHOGONALS, out),
        PieceKind::Queen => {
            rays(board, from, &DIAGONALS, out);
            rays(board, from, &ORTHOGONALS, out);
        }
    }
}

fn steps(from: Square, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(deltas.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
}

fn rays(board: &BoardState, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(s) = cur {
            out.push(s);
            if !board.is_empty(s) {
                break;
            }
            cur = s.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
