use crate::game_state::chess_types::Square;
use crate::moves::knight_moves::{is_knight_jump, knight_targets};

#[inline]
pub fn is_knight_move_shape(from: Square, to: Square) -> bool {
    is_knight_jump(from, to)
}

pub fn knight_candidates(from: Square, out: &mut Vec<Square>) {
    out.extend(knight_targets(from));
}
