use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{is_diagonal, BISHOP_DIRECTIONS};
use crate::moves::rays::trace_ray;
use crate::moves::rook_moves::{is_rook_line, ROOK_DIRECTIONS};

pub fn queen_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    for step in ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS) {
        trace_ray(board, from, step, out);
    }
}

#[inline]
pub fn is_queen_line(from: Square, to: Square) -> bool {
    is_rook_line(from, to) || is_diagonal(from, to)
}
