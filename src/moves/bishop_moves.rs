use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::rays::trace_ray;

/// Diagonal directions in generation order.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    for step in BISHOP_DIRECTIONS {
        trace_ray(board, from, step, out);
    }
}

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = (from.row() as i8 - to.row() as i8).abs();
    let d_col = (from.col() as i8 - to.col() as i8).abs();
    d_row == d_col && d_row != 0
}
