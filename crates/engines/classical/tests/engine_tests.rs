use chess_core::{legal_moves, BoardState, Color, Engine, Game, Move};

use classical_engine::{best_move, is_safe, ClassicalEngine, Difficulty, EngineConfig, MATE_FOUND};

fn fen(text: &str) -> BoardState {
    BoardState::from_fen(text).unwrap()
}

#[test]
fn test_best_move_none_without_moves() {
    let b = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(best_move(&b, Color::Black, Difficulty::Easy), None);
}

#[test]
fn test_best_move_is_safe_when_possible() {
    let positions = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "4k3/8/8/3p4/4Q3/8/8/4K3 w - - 0 1",
    ];
    for text in positions {
        let b = fen(text);
        let side = b.side_to_move;
        let any_safe = legal_moves(&b, side).into_iter().any(|m| is_safe(&b, m));
        let mv = best_move(&b, side, Difficulty::Easy).unwrap();
        if any_safe {
            assert!(is_safe(&b, mv), "{text}: chose unsafe {mv}");
        }
    }
}

#[test]
fn test_engine_trait_reports_search() {
    let mut engine = ClassicalEngine::with_config(EngineConfig {
        difficulty: Difficulty::Easy,
        ..EngineConfig::default()
    });
    assert_eq!(engine.name(), "Classical v1.0");

    let b = BoardState::from_placement("6k1/5ppp/8/8/8/8/5PPP/R5K1");
    let result = engine.think(&b, Color::White);
    assert_eq!(result.best_move, Some(Move::parse("a1a8").unwrap()));
    assert!(result.score >= MATE_FOUND);
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);

    engine.new_game();
    let result = engine.search(&b, Color::White, 1);
    assert_eq!(result.depth, 1);
    assert_eq!(result.best_move, Some(Move::parse("a1a8").unwrap()));
}

#[test]
fn test_engine_plays_out_a_short_game() {
    let mut game = Game::new();
    let mut engine = ClassicalEngine::with_config(EngineConfig {
        difficulty: Difficulty::Easy,
        quiescence_depth: 1,
        ..EngineConfig::default()
    });

    for _ in 0..6 {
        if game.status().is_over() {
            break;
        }
        game.set_searching(true);
        let result = engine.think(game.board(), game.side_to_move());
        game.set_searching(false);

        let mv = result.best_move.expect("ongoing game has a move");
        game.play(mv, None).unwrap();
    }
    assert_eq!(game.history().undo_len(), 6);
}
