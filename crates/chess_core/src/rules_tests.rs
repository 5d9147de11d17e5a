use super::*;

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
fn test_coarse_rejections() {
    let b = BoardState::startpos();
    // Empty source.
    assert!(!is_legal(&b, sq("e4"), sq("e5")));
    // Wrong color for the side to move.
    assert!(!is_legal(&b, sq("e7"), sq("e5")));
    // Null move.
    assert!(!is_legal(&b, sq("e2"), sq("e2")));
    assert!(is_legal(&b, sq("e2"), sq("e4")));
}

#[test]
fn test_pawn_rules() {
    let b = fen("4k3/8/8/8/8/p7/P3P3/4K3 w - - 0 1");
    assert!(is_legal(&b, sq("e2"), sq("e3")));
    assert!(is_legal(&b, sq("e2"), sq("e4")));
    assert!(!is_legal(&b, sq("e2"), sq("e5")));
    // Blocked pawn can neither step nor jump.
    assert!(!is_legal(&b, sq("a2"), sq("a3")));
    assert!(!is_legal(&b, sq("a2"), sq("a4")));
    // No diagonal step onto an empty square.
    assert!(!is_legal(&b, sq("e2"), sq("d3")));
    // No backwards moves.
    assert!(!is_legal(&b, sq("e2"), sq("e1")));

    let b = fen("4k3/8/8/8/8/3p4/4P3/4K3 w - - 0 1");
    assert!(is_legal(&b, sq("e2"), sq("d3")));

    // Two-square advance only from the starting row.
    let b = fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
    assert!(!is_legal(&b, sq("e3"), sq("e5")));
}

#[test]
fn test_knight_and_sliders() {
    let b = BoardState::startpos();
    assert!(is_legal(&b, sq("g1"), sq("f3")));
    assert!(!is_legal(&b, sq("g1"), sq("e2")), "own piece on e2");
    assert!(!is_legal(&b, sq("g1"), sq("g3")));
    assert!(!is_legal(&b, sq("a1"), sq("a3")), "rook blocked by pawn");
    assert!(!is_legal(&b, sq("f1"), sq("c4")), "bishop blocked by pawn");
    assert!(!is_legal(&b, sq("d1"), sq("d3")), "queen blocked by pawn");

    let b = fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
    assert!(is_legal(&b, sq("a1"), sq("a8")));
    assert!(is_legal(&b, sq("a1"), sq("h8")));
    assert!(is_legal(&b, sq("a1"), sq("d1")));
    assert!(!is_legal(&b, sq("a1"), sq("b3")));
    assert!(!is_legal(&b, sq("a1"), sq("f1")), "path runs through own king");
}

#[test]
fn test_king_cannot_step_into_attack() {
    // Rook on a2 covers the whole second rank.
    let b = fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
    assert!(is_legal(&b, sq("e1"), sq("d1")));
    assert!(!is_legal(&b, sq("e1"), sq("e2")));
    assert!(!is_legal(&b, sq("e1"), sq("f2")));

    // The king must not hide behind itself along a checking line.
    let b = fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    assert!(!is_legal(&b, sq("e1"), sq("f1")));
    assert!(is_legal(&b, sq("e1"), sq("e2")));

    // A pawn covers the square diagonally in front of it even while empty.
    let b = fen("4k3/8/8/8/8/8/3p4/5K2 w - - 0 1");
    assert!(!is_legal(&b, sq("f1"), sq("e1")));
}

#[test]
fn test_castling_rules() {
    let b = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(is_legal(&b, sq("e1"), sq("g1")));
    assert!(is_legal(&b, sq("e1"), sq("c1")));

    let mut black = b.clone();
    black.side_to_move = Color::Black;
    assert!(is_legal(&black, sq("e8"), sq("g8")));
    assert!(is_legal(&black, sq("e8"), sq("c8")));

    // Rights gone.
    let b = fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
    assert!(!is_legal(&b, sq("e1"), sq("g1")));
    assert!(is_legal(&b, sq("e1"), sq("c1")));

    // Path blocked on the queen side by a knight on b1.
    let b = fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    assert!(!is_legal(&b, sq("e1"), sq("c1")));

    // Transit square f1 attacked by a rook on f8.
    let b = fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!is_legal(&b, sq("e1"), sq("g1")));
    assert!(is_legal(&b, sq("e1"), sq("c1")));

    // Transit square attacked by a pawn.
    let b = fen("4k3/8/8/8/8/8/6p1/R3K2R w KQ - 0 1");
    assert!(!is_legal(&b, sq("e1"), sq("g1")));

    // No castling out of check.
    let b = fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!is_legal(&b, sq("e1"), sq("g1")));
    assert!(!is_legal(&b, sq("e1"), sq("c1")));

    // The rook has to be there.
    let b = fen("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1");
    assert!(!is_legal(&b, sq("e1"), sq("g1")));
}

#[test]
fn test_en_passant_rule() {
    let b = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    assert!(is_legal(&b, sq("e5"), sq("d6")));
    assert!(!is_legal(&b, sq("e5"), sq("f6")));

    // Without the recorded target the diagonal step is not allowed.
    let b = fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1");
    assert!(!is_legal(&b, sq("e5"), sq("d6")));
}

#[test]
fn test_pinned_piece_is_filtered_by_king_safety() {
    // Bishop e2 pinned by the rook on e8.
    let b = fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
    assert!(is_legal(&b, sq("e2"), sq("d3")), "piece rule alone allows it");
    assert!(leaves_king_in_check(&b, mv("e2d3"), Color::White));
    assert!(!is_fully_legal(&b, mv("e2d3")));
    assert!(is_fully_legal(&b, mv("e1d2")));
}

#[test]
fn test_en_passant_that_exposes_king_is_rejected() {
    // Capturing en passant would open the fifth rank to the rook on h5.
    let b = fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert!(is_legal(&b, sq("e5"), sq("d6")));
    assert!(!is_fully_legal(&b, mv("e5d6")));
}

#[test]
fn test_back_rank_mate() {
    let mut b = BoardState::from_placement("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1");
    assert!(is_fully_legal(&b, mv("a1a8")));
    crate::execute::play_trial(&mut b, mv("a1a8"));

    assert!(is_in_check(&b, Color::Black));
    assert!(!has_any_legal_move(&b, Color::Black));
    assert!(is_checkmate(&b, Color::Black));
    assert!(!is_stalemate(&b, Color::Black));
}

#[test]
fn test_stalemate_is_not_checkmate() {
    let b = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(is_stalemate(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::Black));
    assert!(has_any_legal_move(&b, Color::White));
}

#[test]
fn test_terminal_queries_take_explicit_side() {
    // White is to move, but Black's position can still be asked about.
    let mut b = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    b.side_to_move = Color::White;
    assert!(is_stalemate(&b, Color::Black));
    assert!(!is_stalemate(&b, Color::White));
}

#[test]
fn test_missing_king_fails_safe() {
    let b = BoardState::from_placement("8/8/8/8/8/8/8/R3K3");
    assert!(!is_in_check(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::Black));
    assert!(!has_any_legal_move(&b, Color::Black));
}
