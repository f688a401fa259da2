//! Errors used throughout the rules engine.
//!
//! Most rule outcomes are plain booleans: an illegal move is a `false` from
//! `is_legal`, an empty undo stack is a `false` from `undo_move`. `ChessError`
//! covers the remaining failure modes, which are malformed input and
//! requests made against the wrong game phase.
//!
//! Usage guidelines:
//! - Input-related variants (`OutOfBounds`, `InvalidSquareName`) are
//!   recoverable and suitable for presenting to end users.
//! - `EmptySquare` and `IllegalMove` signal a caller that skipped a legality
//!   check; the state is left untouched when they are returned.
//! - `KingCount` rejects a custom position before it can break the
//!   one-king-per-color invariant.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Raw coordinates outside the 8x8 grid.
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// A square name that is not a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    /// A move was requested from a square holding no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The move is not legal for the side to move.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// The session already reached checkmate or a draw.
    #[error("the game has already finished")]
    GameFinished,

    /// A custom position must hold exactly one king per color.
    ///
    /// Payload: the offending color and how many kings it had.
    #[error("{color} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },
}

pub type ChessResult<T> = Result<T, ChessError>;
