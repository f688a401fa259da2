//! The 8x8 grid plus the cached king squares.
//!
//! `Board` is plain `Copy` data. Legality probing works on a scratch copy,
//! so the live board never passes through an inconsistent state.

use crate::game_state::chess_rules::{BACK_RANK_ORDER, KING_START_COL};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    // [color]
    king_location: [Square; 2],
}

impl Board {
    /// A board with no pieces. King squares default to the initial ones
    /// until a king is placed.
    pub(crate) fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            king_location: [
                Square::fixed(Color::White.back_row(), KING_START_COL),
                Square::fixed(Color::Black.back_row(), KING_START_COL),
            ],
        }
    }

    pub(crate) fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::BOTH {
            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                board.set(
                    Square::fixed(color.back_row(), col as u8),
                    Some(Piece::new(color, *kind)),
                );
            }
            for col in 0..8u8 {
                board.set(
                    Square::fixed(color.pawn_start_row(), col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_location[color.index()]
    }

    /// Writes a square. Placing a king also moves that color's cached king
    /// square.
    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(Piece {
            color,
            kind: PieceKind::King,
        }) = piece
        {
            self.king_location[color.index()] = square;
        }
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square);
        self.squares[square.row() as usize][square.col() as usize] = None;
        piece
    }

    #[inline]
    pub(crate) fn set_king_locations(&mut self, king_location: [Square; 2]) {
        self.king_location = king_location;
    }

    #[inline]
    pub(crate) fn king_locations(&self) -> [Square; 2] {
        self.king_location
    }

    /// Occupied squares, row by row from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}
