//! A game in progress: the board, capture lists and undo/redo history,
//! owned together so collaborators drive play through one value.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::BoardState;
use crate::error::ChessError;
use crate::execute::{apply, needs_promotion, promote};
use crate::history::{CapturedSets, GameHistory, GameSnapshot};
use crate::movegen::legal_moves;
use crate::rules::{has_any_legal_move, is_fully_legal, is_in_check};
use crate::types::*;

/// Terminal-state classification for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn of(board: &BoardState, side: Color) -> GameStatus {
        let check = is_in_check(board, side);
        match (check, has_any_legal_move(board, side)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Result of committing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub captured: Option<Piece>,
    pub promoted: Option<PieceKind>,
    pub castled: bool,
    /// Status of the side that moves next.
    pub status: GameStatus,
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    board: BoardState,
    captured: CapturedSets,
    history: GameHistory,
    searching: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::with_history(GameHistory::new())
    }

    pub fn with_history(history: GameHistory) -> Self {
        Self::from_board_with_history(BoardState::startpos(), history)
    }

    /// Starts a game from an existing position.
    pub fn from_board(board: BoardState) -> Self {
        Self::from_board_with_history(board, GameHistory::new())
    }

    pub fn from_board_with_history(board: BoardState, history: GameHistory) -> Self {
        Self {
            board,
            captured: CapturedSets::new(),
            history,
            searching: false,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }
    pub fn captured(&self) -> &CapturedSets {
        &self.captured
    }
    pub fn history(&self) -> &GameHistory {
        &self.history
    }
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    /// Back to the standard initial layout with an empty history.
    pub fn reset(&mut self) {
        self.board = BoardState::startpos();
        self.captured.clear();
        self.history.clear();
    }

    /// New game from a placement string (puzzle setup). Side to move is set
    /// explicitly since the placement does not carry it.
    pub fn load_placement(&mut self, placement: &str, side_to_move: Color) {
        self.board = BoardState::from_placement(placement);
        self.board.side_to_move = side_to_move;
        self.captured.clear();
        self.history.clear();
    }

    /// Marks a search as running on a copy of this game's board. While set,
    /// undo and redo are refused.
    pub fn set_searching(&mut self, searching: bool) {
        self.searching = searching;
    }
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.board.side_to_move)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board, self.board.side_to_move)
    }

    /// Commits a move for the side to move. A pawn reaching its last rank
    /// becomes `promotion`, or a queen when none is given.
    pub fn play(&mut self, mv: Move, promotion: Option<PieceKind>) -> Result<MoveOutcome, ChessError> {
        if let Some(kind) = promotion
            && !kind.is_promotion_choice()
        {
            return Err(ChessError::InvalidPromotion(kind));
        }
        if !is_fully_legal(&self.board, mv) {
            return Err(ChessError::IllegalMove(mv));
        }

        self.history.push(self.snapshot());

        let mover = self.board.side_to_move;
        let fx = apply(&mut self.board, mv);
        if let Some(pc) = fx.captured {
            self.captured.record(pc);
        }

        let promoted = if needs_promotion(&self.board, mv.to) {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            promote(&mut self.board, mv.to, kind);
            Some(kind)
        } else {
            None
        };

        self.board.side_to_move = mover.other();
        let status = self.status();
        debug!(%mv, ?status, captured = ?fx.captured, "move committed");

        Ok(MoveOutcome {
            captured: fx.captured,
            promoted,
            castled: fx.castle_rook.is_some(),
            status,
        })
    }

    /// Steps back one committed move. Returns false when there is nothing to
    /// undo or a search is running.
    pub fn undo(&mut self) -> bool {
        if self.searching {
            warn!("undo refused while a search is in progress");
            return false;
        }
        match self.history.undo(self.snapshot()) {
            Some(prev) => {
                self.restore(prev);
                debug!("undo");
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone move. Returns false when there is nothing to
    /// redo or a search is running.
    pub fn redo(&mut self) -> bool {
        if self.searching {
            warn!("redo refused while a search is in progress");
            return false;
        }
        match self.history.redo(self.snapshot()) {
            Some(next) => {
                self.restore(next);
                debug!("redo");
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            captured: self.captured.clone(),
        }
    }

    fn restore(&mut self, snap: GameSnapshot) {
        self.board = snap.board;
        self.captured = snap.captured;
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
