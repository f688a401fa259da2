use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::rays::trace_ray;

/// Orthogonal directions in generation order.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub fn rook_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    for step in ROOK_DIRECTIONS {
        trace_ray(board, from, step, out);
    }
}

#[inline]
pub fn is_rook_line(from: Square, to: Square) -> bool {
    from != to && (from.row() == to.row() || from.col() == to.col())
}
