//! Classical Chess Engine
//!
//! Minimax search with alpha-beta pruning over a hand-tuned evaluation:
//! material, piece-square tables, hanging-piece threats and forks.

mod config;
mod eval;
mod exchange;
mod ordering;
mod search;

use chess_core::{BoardState, Color, Engine, Move, SearchResult};

pub use config::{ConfigError, Difficulty, EngineConfig, MAX_QUIESCENCE_DEPTH};
pub use eval::{evaluate, forks, is_endgame, threats};
pub use exchange::{count_attackers, is_safe, see};
pub use ordering::{order_moves, score_move};
pub use search::{pick_best_move, MATE_FOUND, MATE_SCORE};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Material plus piece-square evaluation with threat and fork terms
/// - A move-safety filter at the root
/// - Capture ordering by static exchange
/// - Quiescence search on non-losing captures
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: EngineConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Searches at the configured difficulty.
    pub fn think(&mut self, board: &BoardState, side: Color) -> SearchResult {
        let depth = self.config.difficulty.depth();
        self.search(board, side, depth)
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &BoardState, side: Color, depth: u8) -> SearchResult {
        self.nodes = 0;
        let best = pick_best_move(board, side, depth, self.config.quiescence_depth, &mut self.nodes);

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Best move for `side` at `difficulty`, or `None` when `side` has no legal
/// move.
pub fn best_move(board: &BoardState, side: Color, difficulty: Difficulty) -> Option<Move> {
    ClassicalEngine::with_config(EngineConfig {
        difficulty,
        ..EngineConfig::default()
    })
    .think(board, side)
    .best_move
}
