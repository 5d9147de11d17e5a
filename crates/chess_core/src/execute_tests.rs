use super::*;
use crate::board::CastlingRights;

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

fn mv(text: &str) -> Move {
    Move::parse(text).unwrap()
}

fn fen(text: &str) -> BoardState {
    BoardState::from_fen(text).unwrap()
}

#[test]
fn test_quiet_move_relocates_piece() {
    let mut b = BoardState::startpos();
    let fx = apply(&mut b, mv("g1f3"));
    assert_eq!(fx, CaptureEffects::default());
    assert!(b.is_empty(sq("g1")));
    assert_eq!(b.piece_at(sq("f3")), Some(Piece::new(Color::White, PieceKind::Knight)));
    // Turn handling belongs to the caller.
    assert_eq!(b.side_to_move, Color::White);
}

#[test]
fn test_double_step_sets_en_passant_target() {
    let mut b = BoardState::startpos();
    apply(&mut b, mv("e2e4"));
    assert_eq!(b.en_passant, Some(sq("e3")));

    apply(&mut b, mv("d7d5"));
    assert_eq!(b.en_passant, Some(sq("d6")));

    apply(&mut b, mv("g1f3"));
    assert_eq!(b.en_passant, None, "target lives for one ply only");
}

#[test]
fn test_en_passant_removes_bypassed_pawn() {
    let mut b = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let fx = apply(&mut b, mv("e5d6"));

    assert_eq!(fx.captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(fx.captured_on, Some(sq("d5")));
    assert!(b.is_empty(sq("d5")));
    assert!(b.is_empty(sq("e5")));
    assert_eq!(b.piece_at(sq("d6")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    assert_eq!(b.en_passant, None);
}

#[test]
fn test_castling_moves_the_rook() {
    let mut b = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let fx = apply(&mut b, mv("e1g1"));
    assert_eq!(fx.castle_rook, Some(mv("h1f1")));
    assert_eq!(b.piece_at(sq("g1")), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(b.piece_at(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert!(b.is_empty(sq("h1")));
    assert!(!b.castling.wk && !b.castling.wq);
    assert!(b.castling.bk && b.castling.bq);

    let fx = apply(&mut b, mv("e8c8"));
    assert_eq!(fx.castle_rook, Some(mv("a8d8")));
    assert_eq!(b.piece_at(sq("d8")), Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert!(b.is_empty(sq("a8")));
    assert_eq!(b.castling, CastlingRights::NONE);
}

#[test]
fn test_rook_moves_and_captures_revoke_rights() {
    let mut b = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    apply(&mut b, mv("h1h4"));
    assert!(!b.castling.wk);
    assert!(b.castling.wq);

    // Taking the rook on its home square removes the victim's right.
    let fx = apply(&mut b, mv("a1a8"));
    assert_eq!(fx.captured, Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert!(!b.castling.wq);
    assert!(!b.castling.bq);
    assert!(b.castling.bk);
}

#[test]
fn test_apply_leaves_promotion_to_caller() {
    let mut b = fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    apply(&mut b, mv("a7a8"));
    assert!(needs_promotion(&b, sq("a8")));

    assert!(!promote(&mut b, sq("a8"), PieceKind::King));
    assert!(!promote(&mut b, sq("a8"), PieceKind::Pawn));
    assert!(promote(&mut b, sq("a8"), PieceKind::Knight));
    assert_eq!(b.piece_at(sq("a8")), Some(Piece::new(Color::White, PieceKind::Knight)));
    assert!(!needs_promotion(&b, sq("a8")));
    assert!(!promote(&mut b, sq("a8"), PieceKind::Queen), "nothing left to promote");
}

#[test]
fn test_play_trial_queens_and_passes_turn() {
    let b = fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
    let next = after(&b, mv("a2a1"));
    assert_eq!(next.piece_at(sq("a1")), Some(Piece::new(Color::Black, PieceKind::Queen)));
    assert_eq!(next.side_to_move, Color::White);
    // The source board is untouched.
    assert_eq!(b.piece_at(sq("a2")), Some(Piece::new(Color::Black, PieceKind::Pawn)));
}

#[test]
fn test_apply_from_empty_square_is_noop() {
    let mut b = BoardState::startpos();
    let before = b.clone();
    let fx = apply(&mut b, mv("e4e5"));
    assert_eq!(fx, CaptureEffects::default());
    assert_eq!(b, before);
}
