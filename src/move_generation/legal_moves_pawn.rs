//! Pawn move shapes and candidate squares.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_en_passant_capture;
use crate::moves::pawn_moves::{pawn_push, PAWN_CAPTURE_COLS};

/// Geometry and occupancy rules for a pawn, ignoring check.
pub fn is_pawn_move_shape(game_state: &GameState, from: Square, to: Square, pawn: Piece) -> bool {
    let color = pawn.color;
    let forward = color.forward();
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    let board = &game_state.board;

    if d_col == 0 && d_row == forward {
        return board.is_empty(to);
    }

    if d_col == 0 && d_row == 2 * forward {
        return from.row() == color.pawn_start_row()
            && board.is_empty(to)
            && pawn_push(from, color).is_some_and(|mid| board.is_empty(mid));
    }

    if d_col == 1 && d_row == forward {
        return match board.piece_at(to) {
            Some(target) => target.color != color,
            None => is_en_passant_capture(game_state, from, to, color),
        };
    }

    false
}

/// Pushes, then the double step from the start row, then both diagonals.
pub fn pawn_candidates(from: Square, color: Color, out: &mut Vec<Square>) {
    let Some(one_step) = pawn_push(from, color) else {
        return;
    };
    out.push(one_step);

    if from.row() == color.pawn_start_row() {
        if let Some(two_step) = pawn_push(one_step, color) {
            out.push(two_step);
        }
    }

    for d_col in PAWN_CAPTURE_COLS {
        if let Some(diagonal) = one_step.offset(0, d_col) {
            out.push(diagonal);
        }
    }
}
