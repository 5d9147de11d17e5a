//! Snapshots of committed game states for undo and redo.

use std::collections::VecDeque;

use crate::board::BoardState;
use crate::types::*;

/// Slots per side in a capture list. A side owns 15 capturable pieces, so
/// sixteen always suffice.
pub const CAPTURE_SLOTS: usize = 16;

/// Pieces captured so far, grouped by the color of the captured piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedSets {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedSets {
    pub fn new() -> Self {
        Self {
            white: Vec::with_capacity(CAPTURE_SLOTS),
            black: Vec::with_capacity(CAPTURE_SLOTS),
        }
    }

    /// Records a captured piece in its color's list. Callers guarantee that
    /// no list ever exceeds [`CAPTURE_SLOTS`]; legal chess cannot break this.
    pub fn record(&mut self, piece: Piece) {
        let list = match piece.color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        debug_assert!(list.len() < CAPTURE_SLOTS, "capture list overflow");
        list.push(piece);
    }

    /// Captured pieces of color `c`, in capture order.
    pub fn of(&self, c: Color) -> &[Piece] {
        match c {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }
}

/// Everything restored by undo and redo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: BoardState,
    pub captured: CapturedSets,
}

/// Linear undo/redo log of full snapshots.
#[derive(Clone, Debug, Default)]
pub struct GameHistory {
    undo: VecDeque<GameSnapshot>,
    redo: Vec<GameSnapshot>,
    limit: Option<usize>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` undo snapshots; the oldest is dropped
    /// first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Records the state before a committed move. Any redo line is lost.
    pub fn push(&mut self, before: GameSnapshot) {
        self.undo.push_back(before);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
        self.redo.clear();
    }

    /// Steps back one move. `current` goes onto the redo stack and the
    /// previous snapshot is returned; `None` when there is nothing to undo.
    pub fn undo(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let prev = self.undo.pop_back()?;
        self.redo.push(current);
        Some(prev)
    }

    /// Re-applies an undone move. `current` goes back onto the undo stack.
    pub fn redo(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
