//! Move application and its exact inverse.
//!
//! `apply_move` trusts the caller to have checked legality; it only refuses
//! an empty origin. Every effect it has is captured in the pushed
//! `MoveRecord`, and `undo_move` replays that record backwards so that
//! `apply_move` followed by `undo_move` leaves the `GameState` unchanged.

use log::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::en_passant_victim_square;

pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveRecord> {
    let piece_moved = game_state
        .board
        .piece_at(from)
        .ok_or(ChessError::EmptySquare(from))?;
    let mover = piece_moved.color;
    let is_pawn = piece_moved.kind == PieceKind::Pawn;

    let prev_king_location = game_state.board.king_locations();
    let prev_castling_rights = game_state.castling_rights;
    let prev_en_passant_target = game_state.en_passant_target;
    let prev_side_to_move = game_state.side_to_move;

    // Captures, including the passed pawn of an en-passant capture.
    let is_en_passant = is_pawn
        && from.col() != to.col()
        && prev_en_passant_target == Some(to)
        && game_state.board.is_empty(to);
    let capture_square = if is_en_passant {
        en_passant_victim_square(from, to)
    } else {
        Some(to)
    };
    let piece_captured = capture_square.and_then(|square| game_state.board.take(square));
    let captured_square = capture_square.filter(|_| piece_captured.is_some());
    if let Some(captured) = piece_captured {
        game_state.captured_by[mover.index()].push(captured.kind);
    }

    // Relocate, auto-promoting to a queen on the last row.
    game_state.board.take(from);
    let is_promotion = is_pawn && to.row() == mover.promotion_row();
    let placed = if is_promotion {
        Piece::new(mover, PieceKind::Queen)
    } else {
        piece_moved
    };
    game_state.board.set(to, Some(placed));

    // Castling rook.
    let rook_move = if piece_moved.kind == PieceKind::King && is_two_column_step(from, to) {
        CastleSide::from_king_to_col(to.col()).and_then(|side| {
            let rook_from = Square::fixed(to.row(), side.rook_from_col());
            let rook_to = Square::fixed(to.row(), side.rook_to_col());
            let rook = game_state.board.take(rook_from)?;
            game_state.board.set(rook_to, Some(rook));
            Some((rook_from, rook_to))
        })
    } else {
        None
    };

    game_state.en_passant_target = if is_pawn && from.row().abs_diff(to.row()) == 2 {
        Square::new(((from.row() + to.row()) / 2) as i8, to.col() as i8)
    } else {
        None
    };

    update_castling_rights(&mut game_state.castling_rights, piece_moved, from, to);
    game_state.side_to_move = mover.opposite();

    let record = MoveRecord {
        from,
        to,
        piece_moved,
        piece_captured,
        captured_square,
        prev_side_to_move,
        prev_en_passant_target,
        prev_castling_rights,
        prev_king_location,
        is_castle: rook_move.is_some(),
        is_en_passant: is_en_passant && piece_captured.is_some(),
        is_promotion,
        rook_move,
    };

    game_state.move_history.push(record);
    game_state.castling_rights_log.push(game_state.castling_rights);

    trace!(
        "applied {}{} ({:?} {:?}), ply {}",
        from,
        to,
        mover,
        piece_moved.kind,
        game_state.move_history.len()
    );

    Ok(record)
}

/// Pops the last record and restores the state it was taken from.
/// Returns `false`, changing nothing, when there is no move to undo.
pub fn undo_move(game_state: &mut GameState) -> bool {
    let Some(record) = game_state.move_history.pop() else {
        return false;
    };

    game_state.board.take(record.to);
    game_state.board.set(record.from, Some(record.piece_moved));

    if let (Some(captured), Some(square)) = (record.piece_captured, record.captured_square) {
        game_state.board.set(square, Some(captured));
        game_state.captured_by[record.piece_moved.color.index()].pop();
    }

    if let Some((rook_from, rook_to)) = record.rook_move {
        let rook = game_state.board.take(rook_to);
        game_state.board.set(rook_from, rook);
    }

    game_state.board.set_king_locations(record.prev_king_location);
    game_state.en_passant_target = record.prev_en_passant_target;
    game_state.castling_rights_log.pop();
    game_state.castling_rights = record.prev_castling_rights;
    game_state.side_to_move = record.prev_side_to_move;

    trace!(
        "undid {}{}, ply {}",
        record.from,
        record.to,
        game_state.move_history.len()
    );

    true
}

#[inline]
fn is_two_column_step(from: Square, to: Square) -> bool {
    from.row() == to.row() && from.col().abs_diff(to.col()) == 2
}

/// A king move drops both of its color's rights. Anything leaving or
/// landing on a rook's start corner drops the right tied to that corner.
fn update_castling_rights(rights: &mut CastlingRights, piece_moved: Piece, from: Square, to: Square) {
    if piece_moved.kind == PieceKind::King {
        rights.revoke_all(piece_moved.color);
    }

    for color in Color::BOTH {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            let corner = Square::fixed(color.back_row(), side.rook_from_col());
            if from == corner || to == corner {
                rights.revoke(color, side);
            }
        }
    }
}
