//! Full legal move pipeline.
//!
//! Dispatches to the per-piece shape validators, then filters every shape-legal
//! move through the scratch-board self-check probe. Destinations come back in
//! generation order: ray directions first, then the fixed offset tables.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::leaves_king_attacked;
use crate::move_generation::legal_moves_bishop::{bishop_candidates, is_bishop_move_shape};
use crate::move_generation::legal_moves_king::{is_king_move_shape, king_candidates};
use crate::move_generation::legal_moves_knight::{is_knight_move_shape, knight_candidates};
use crate::move_generation::legal_moves_pawn::{is_pawn_move_shape, pawn_candidates};
use crate::move_generation::legal_moves_queen::{is_queen_move_shape, queen_candidates};
use crate::move_generation::legal_moves_rook::{is_rook_move_shape, rook_candidates};

/// True iff `mover` owns the piece on `from`, the move fits the piece's
/// movement rules, and it does not leave `mover`'s king attacked.
pub fn is_legal(game_state: &GameState, from: Square, to: Square, mover: Color) -> bool {
    let Some(piece) = game_state.piece_at(from) else {
        return false;
    };
    if piece.color != mover {
        return false;
    }
    if game_state.piece_at(to).is_some_and(|target| target.color == mover) {
        return false;
    }

    let shape_ok = match piece.kind {
        PieceKind::Pawn => is_pawn_move_shape(game_state, from, to, piece),
        PieceKind::Knight => is_knight_move_shape(from, to),
        PieceKind::Bishop => is_bishop_move_shape(game_state, from, to),
        PieceKind::Rook => is_rook_move_shape(game_state, from, to),
        PieceKind::Queen => is_queen_move_shape(game_state, from, to),
        PieceKind::King => is_king_move_shape(game_state, from, to, piece),
    };

    shape_ok && !leaves_king_attacked(game_state, from, to, mover)
}

/// Legal destinations for the piece on `square`, for whichever color owns
/// it. Empty for an empty square.
pub fn legal_moves_from(game_state: &GameState, square: Square) -> Vec<Square> {
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_candidates(square, piece.color, &mut candidates),
        PieceKind::Knight => knight_candidates(square, &mut candidates),
        PieceKind::Bishop => bishop_candidates(game_state, square, &mut candidates),
        PieceKind::Rook => rook_candidates(game_state, square, &mut candidates),
        PieceKind::Queen => queen_candidates(game_state, square, &mut candidates),
        PieceKind::King => king_candidates(square, piece.color, &mut candidates),
    }

    candidates.retain(|to| is_legal(game_state, square, *to, piece.color));
    candidates
}

/// Every legal `(from, to)` pair for `color`, origins scanned row by row.
pub fn all_legal_moves(game_state: &GameState, color: Color) -> Vec<(Square, Square)> {
    let origins: Vec<Square> = game_state
        .board
        .pieces_of(color)
        .map(|(square, _)| square)
        .collect();

    origins
        .into_iter()
        .flat_map(|from| {
            legal_moves_from(game_state, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .board
        .pieces_of(color)
        .any(|(square, _)| !legal_moves_from(game_state, square).is_empty())
}
