//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! row/column `Square` used internally. Rank 8 is row 0.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

impl Square {
    /// Parse algebraic notation (for example: "e4").
    pub fn from_algebraic(name: &str) -> ChessResult<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquareName(name.to_owned()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquareName(name.to_owned()));
        }

        let col = (file - b'a') as i8;
        let row = 7 - (rank - b'1') as i8;
        Square::new(row, col).ok_or(ChessError::OutOfBounds {
            row: row as i32,
            col: col as i32,
        })
    }

    /// Like `Square::new`, but reports the offending coordinates.
    pub fn try_from_coords(row: i32, col: i32) -> ChessResult<Self> {
        let in_range = |v: i32| (0..8).contains(&v);
        if !in_range(row) || !in_range(col) {
            return Err(ChessError::OutOfBounds { row, col });
        }
        Square::new(row as i8, col as i8).ok_or(ChessError::OutOfBounds { row, col })
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col())
    }

    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'8' - self.row())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
