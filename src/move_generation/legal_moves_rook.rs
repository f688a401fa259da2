//! Rook move shapes and candidate squares.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::rays::path_is_clear;
use crate::moves::rook_moves::{is_rook_line, rook_targets};

pub fn is_rook_move_shape(game_state: &GameState, from: Square, to: Square) -> bool {
    is_rook_line(from, to) && path_is_clear(&game_state.board, from, to)
}

pub fn rook_candidates(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    rook_targets(&game_state.board, from, out);
}
