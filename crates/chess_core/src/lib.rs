pub mod attacks;
pub mod board;
pub mod error;
pub mod execute;
pub mod game;
pub mod history;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::{attackers, piece_attacks};
pub use board::*;
pub use error::ChessError;
pub use execute::{CaptureEffects, after, apply, needs_promotion, play_trial, promote};
pub use game::*;
pub use history::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move chooser
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the searching side's perspective
    pub score: i32,
    /// Search depth in plies, not counting the capture extension
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// The search works on its own copy of the board, so callers keep
/// ownership of their game state while it runs.
pub trait Engine: Send {
    /// Choose a move for `side` in `board`, searching `depth` plies.
    fn search(&mut self, board: &BoardState, side: Color, depth: u8) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
