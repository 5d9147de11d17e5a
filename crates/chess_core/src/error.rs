use thiserror::Error;

use crate::types::{Move, PieceKind};

/// Errors raised at the boundary of the rules engine: parsing external text
/// and committing moves through [`crate::Game`]. Rule queries themselves
/// answer with booleans and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),
}
