//! King move shapes, including castling, and candidate squares.

use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::{is_king_step, king_targets};
use crate::moves::rays::path_is_clear;

pub fn is_king_move_shape(game_state: &GameState, from: Square, to: Square, king: Piece) -> bool {
    is_king_step(from, to) || castle_side(game_state, from, to, king.color).is_some()
}

/// The side being castled when `from -> to` is a permitted castle for `color`.
///
/// Requires the king on its start square, the matching right, the rook on
/// its corner, an empty path between them, and none of the king's origin,
/// transit or destination squares attacked.
pub fn castle_side(game_state: &GameState, from: Square, to: Square, color: Color) -> Option<CastleSide> {
    let back_row = color.back_row();
    if from != Square::fixed(back_row, KING_START_COL) || to.row() != back_row {
        return None;
    }

    let side = CastleSide::from_king_to_col(to.col())?;
    if !game_state.castling_rights.allows(color, side) {
        return None;
    }

    let board = &game_state.board;
    let rook_square = Square::fixed(back_row, side.rook_from_col());
    if board.piece_at(rook_square) != Some(Piece::new(color, PieceKind::Rook)) {
        return None;
    }
    if !path_is_clear(board, from, rook_square) {
        return None;
    }

    let enemy = color.opposite();
    let transit = Square::fixed(back_row, side.rook_to_col());
    if [from, transit, to]
        .into_iter()
        .any(|square| is_square_attacked(board, square, enemy))
    {
        return None;
    }

    Some(side)
}

/// Adjacent squares, then both castle destinations on the back row.
pub fn king_candidates(from: Square, color: Color, out: &mut Vec<Square>) {
    out.extend(king_targets(from));

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        let destination = Square::fixed(color.back_row(), side.king_to_col());
        if !out.contains(&destination) {
            out.push(destination);
        }
    }
}
