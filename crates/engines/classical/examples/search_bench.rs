//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p classical_engine -- [difficulty] [fen]
//!
//! Examples:
//!   # Default: medium difficulty over the built-in positions
//!   cargo flamegraph --example search_bench -p classical_engine
//!
//!   # Hard difficulty on one position
//!   cargo flamegraph --example search_bench -p classical_engine -- hard "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1"

use std::env;
use std::time::Instant;

use chess_core::{BoardState, Engine};
use classical_engine::{ClassicalEngine, Difficulty, EngineConfig};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Italian",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
    ),
    ("Back-rank mate", "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1"),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let difficulty = match args.get(1).map(|s| s.parse::<Difficulty>()) {
        Some(Ok(d)) => d,
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        None => Difficulty::Medium,
    };

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => TEST_POSITIONS.to_vec(),
    };

    let mut engine = ClassicalEngine::with_config(EngineConfig {
        difficulty,
        ..EngineConfig::default()
    });

    println!("=== Search Benchmark ===");
    println!("Difficulty: {difficulty} (depth {})", difficulty.depth());
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in positions {
        let board = match BoardState::from_fen(fen) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        engine.new_game();

        print!("{name:.<30}");

        let start = Instant::now();
        let result = engine.think(&board, board.side_to_move);
        let elapsed = start.elapsed();

        total_nodes += result.nodes;
        total_time += elapsed;

        let best = result
            .best_move
            .map(|m| m.to_string())
            .unwrap_or_else(|| "none".to_string());
        println!(
            " {best:<6} score {:>7} {:>10} nodes in {elapsed:>8.3?}",
            result.score, result.nodes
        );
    }

    println!();
    println!("{:=<70}", "");
    let nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({nps:.0} nps)");
}
