use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::queen_moves::{is_queen_line, queen_targets};
use crate::moves::rays::path_is_clear;

pub fn is_queen_move_shape(game_state: &GameState, from: Square, to: Square) -> bool {
    is_queen_line(from, to) && path_is_clear(&game_state.board, from, to)
}

pub fn queen_candidates(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    queen_targets(&game_state.board, from, out);
}
