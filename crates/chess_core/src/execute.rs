//! Applying moves to a board.

use crate::board::BoardState;
use crate::types::*;

/// What a move removed from the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureEffects {
    /// The captured piece, if any.
    pub captured: Option<Piece>,
    /// Where the captured piece stood. Differs from the destination only for
    /// en passant.
    pub captured_on: Option<Square>,
    /// Rook relocation performed by castling.
    pub castle_rook: Option<Move>,
}

/// Applies a move already judged legal. Updates castling rights, removes an
/// en-passant victim, relocates the piece, recomputes the en-passant target
/// and moves the rook when castling. Promotion and the change of turn are
/// left to the caller. Moving from an empty square does nothing.
pub fn apply(board: &mut BoardState, mv: Move) -> CaptureEffects {
    let mut fx = CaptureEffects::default();
    let piece = match board.piece_at(mv.from) {
        Some(pc) => pc,
        None => return fx,
    };
    let (from, to) = (mv.from, mv.to);
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::King => board.castling.revoke_all(piece.color),
        PieceKind::Rook => board.castling.revoke_rook(piece.color, from),
        _ => {}
    }

    if piece.kind == PieceKind::Pawn && dc != 0 && board.en_passant == Some(to) && board.is_empty(to)
    {
        let victim_sq = Square::at(from.row(), to.col());
        if let Some(victim) = board.piece_at(victim_sq) {
            fx.captured = Some(victim);
            fx.captured_on = Some(victim_sq);
            board.set_piece(victim_sq, None);
        }
    }

    if let Some(victim) = board.piece_at(to) {
        if victim.kind == PieceKind::Rook {
            board.castling.revoke_rook(victim.color, to);
        }
        fx.captured = Some(victim);
        fx.captured_on = Some(to);
    }

    board.set_piece(to, Some(piece));
    board.set_piece(from, None);

    board.en_passant = if piece.kind == PieceKind::Pawn && dr.abs() == 2 {
        from.offset(dr / 2, 0)
    } else {
        None
    };

    if piece.kind == PieceKind::King && dr == 0 && dc.abs() == 2 {
        let row = from.row();
        let (rook_from, rook_to) = if dc > 0 {
            (Square::at(row, 7), Square::at(row, 5))
        } else {
            (Square::at(row, 0), Square::at(row, 3))
        };
        let rook = board.piece_at(rook_from);
        board.set_piece(rook_from, None);
        board.set_piece(rook_to, rook);
        fx.castle_rook = Some(Move::new(rook_from, rook_to));
    }

    fx
}

/// Whether the piece on `sq` is a pawn standing on its last rank.
pub fn needs_promotion(board: &BoardState, sq: Square) -> bool {
    matches!(board.piece_at(sq), Some(pc) if pc.kind == PieceKind::Pawn && sq.row() == pc.color.promotion_row())
}

/// Replaces a pawn on its last rank with `kind`. Returns false, leaving the
/// board alone, when there is nothing to promote or `kind` is not one of
/// queen, rook, bishop or knight.
pub fn promote(board: &mut BoardState, sq: Square, kind: PieceKind) -> bool {
    if !kind.is_promotion_choice() || !needs_promotion(board, sq) {
        return false;
    }
    if let Some(pc) = board.piece_at(sq) {
        board.set_piece(sq, Some(Piece::new(pc.color, kind)));
    }
    true
}

/// Plays a move on a scratch board the way search does: apply it, promote
/// to a queen, and hand the turn to the other side.
pub fn play_trial(board: &mut BoardState, mv: Move) -> CaptureEffects {
    let mover = board.piece_at(mv.from).map(|pc| pc.color);
    let fx = apply(board, mv);
    promote(board, mv.to, PieceKind::Queen);
    if let Some(c) = mover {
        board.side_to_move = c.other();
    }
    fx
}

/// Returns a copy of `board` with `mv` played by [`play_trial`].
pub fn after(board: &BoardState, mv: Move) -> BoardState {
    let mut next = board.clone();
    play_trial(&mut next, mv);
    next
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod execute_tests;
