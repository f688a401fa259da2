//! Bishop move shapes and candidate squares.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::{bishop_targets, is_diagonal};
use crate::moves::rays::path_is_clear;

pub fn is_bishop_move_shape(game_state: &GameState, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && path_is_clear(&game_state.board, from, to)
}

pub fn bishop_candidates(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    bishop_targets(&game_state.board, from, out);
}
