//! Minimal move text for comparing against puzzle solutions.
//!
//! This is not a SAN generator: it never disambiguates between two pieces of
//! the same kind and never appends check or mate suffixes.

use crate::board::BoardState;
use crate::types::*;

/// Renders `mv` as piece letter, capture mark and destination, e.g. `Nf3`,
/// `Nxe4`, `exd5`, `e4`. Must be called before the move is applied.
pub fn move_to_text(board: &BoardState, mv: Move) -> String {
    let piece = match board.piece_at(mv.from) {
        Some(pc) => pc,
        None => return String::new(),
    };
    let is_pawn = piece.kind == PieceKind::Pawn;
    let is_capture = !board.is_empty(mv.to)
        || (is_pawn && mv.from.col() != mv.to.col() && board.en_passant == Some(mv.to));

    let mut out = String::with_capacity(6);
    if !is_pawn {
        out.push(piece.kind.letter());
    }
    if is_capture {
        if is_pawn {
            out.push(mv.from.file_char());
        }
        out.push('x');
    }
    out.push(mv.to.file_char());
    out.push(mv.to.rank_char());
    out
}

/// Strips check and mate marks and spaces so `Ra8#` compares equal to `Ra8`.
pub fn normalize_move_text(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '+' | '#' | ' '))
        .collect()
}

/// Like [`move_to_text`], appending `=Q` style promotion text when the move
/// takes a pawn to its last rank.
pub fn move_to_text_promoting(board: &BoardState, mv: Move, promotion: PieceKind) -> String {
    let mut out = move_to_text(board, mv);
    let promotes = matches!(
        board.piece_at(mv.from),
        Some(pc) if pc.kind == PieceKind::Pawn && mv.to.row() == pc.color.promotion_row()
    );
    if promotes {
        out.push('=');
        out.push(promotion.letter());
    }
    out
}

/// Whether playing `mv` on `board` produces the expected solution text.
/// `promotion` is the piece chosen for a pawn reaching its last rank.
pub fn matches_solution(
    board: &BoardState,
    mv: Move,
    promotion: Option<PieceKind>,
    expected: &str,
) -> bool {
    let text = match promotion {
        Some(kind) => move_to_text_promoting(board, mv, kind),
        None => move_to_text(board, mv),
    };
    normalize_move_text(&text) == normalize_move_text(expected)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
