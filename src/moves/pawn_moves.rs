use crate::game_state::chess_types::{Color, Square};

/// Column deltas of the two pawn capture squares, in generation order.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

/// One step forward for `color`, if still on the board.
#[inline]
pub fn pawn_push(from: Square, color: Color) -> Option<Square> {
    from.offset(color.forward(), 0)
}

/// Squares from which a `color` pawn would attack `target`.
///
/// They sit one row behind `target` relative to the pawn's direction.
#[inline]
pub fn pawn_attack_origins(target: Square, color: Color) -> impl Iterator<Item = Square> {
    PAWN_CAPTURE_COLS
        .into_iter()
        .filter_map(move |d_col| target.offset(-color.forward(), d_col))
}
