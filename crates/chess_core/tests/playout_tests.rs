//! Seeded random games checking invariants that must hold after every move.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use chess_core::{Color, Game, PieceKind};

const GAMES: u64 = 8;
const MAX_PLIES: usize = 120;

fn king_count(game: &Game, c: Color) -> usize {
    game.board()
        .pieces(c)
        .filter(|(_, pc)| pc.kind == PieceKind::King)
        .count()
}

#[test]
fn random_games_keep_rule_invariants() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        for ply in 0..MAX_PLIES {
            let moves = game.legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                assert!(game.status().is_over(), "seed {seed} ply {ply}: no moves but not over");
                break;
            };
            let mover = game.side_to_move();
            game.play(mv, None)
                .unwrap_or_else(|e| panic!("seed {seed} ply {ply}: generated move rejected: {e}"));

            assert!(!game.board().in_check(mover), "seed {seed} ply {ply}: {mv} left king in check");
            assert_eq!(game.side_to_move(), mover.other());
            assert_eq!(king_count(&game, Color::White), 1);
            assert_eq!(king_count(&game, Color::Black), 1);
            // 32 pieces at the start, each capture removes one.
            let on_board = game.board().pieces(Color::White).count() + game.board().pieces(Color::Black).count();
            let taken = game.captured().of(Color::White).len() + game.captured().of(Color::Black).len();
            assert_eq!(on_board + taken, 32, "seed {seed} ply {ply}");
        }
    }
}

#[test]
fn undo_all_then_redo_all_round_trips() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = Game::new();
    let start = game.snapshot();
    let mut played = 0;

    for _ in 0..40 {
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else { break };
        game.play(mv, None).unwrap();
        played += 1;
    }
    let end = game.snapshot();

    for _ in 0..played {
        assert!(game.undo());
    }
    assert!(!game.undo());
    assert_eq!(game.snapshot(), start);

    for _ in 0..played {
        assert!(game.redo());
    }
    assert!(!game.redo());
    assert_eq!(game.snapshot(), end);
}
