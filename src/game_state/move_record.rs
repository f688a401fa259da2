//! Undo snapshot for one applied move.

use crate::game_state::chess_types::*;

/// Single undo record for `apply_move` / `undo_move`.
///
/// Holds everything needed to invert exactly one applied move. Records are
/// pushed on apply and popped once, last in first out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from`; a pawn for promotions.
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    /// Where the captured piece stood. Differs from `to` for en passant.
    pub captured_square: Option<Square>,

    pub prev_side_to_move: Color,
    pub prev_en_passant_target: Option<Square>,
    pub prev_castling_rights: CastlingRights,
    // [color]
    pub prev_king_location: [Square; 2],

    pub is_castle: bool,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    /// Rook origin and destination for castling moves.
    pub rook_move: Option<(Square, Square)>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }
}
