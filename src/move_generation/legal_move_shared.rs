use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;

/// Square of the pawn an en-passant capture from `from` to `to` removes.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Option<Square> {
    Square::new(from.row() as i8, to.col() as i8)
}

/// True when a `color` pawn moving diagonally from `from` to `to` would be
/// an en-passant capture: `to` is the current target and the passed enemy
/// pawn is still beside `from`.
pub fn is_en_passant_capture(game_state: &GameState, from: Square, to: Square, color: Color) -> bool {
    if game_state.en_passant_target != Some(to) || from.col() == to.col() {
        return false;
    }
    en_passant_victim_square(from, to)
        .and_then(|sq| game_state.board.piece_at(sq))
        .is_some_and(|victim| victim.is(color.opposite(), PieceKind::Pawn))
}

/// Plays `from -> to` on a scratch copy of the board and reports whether the
/// mover's king would then be attacked.
///
/// The live state is never touched, so no revert step can be skipped. Only
/// the moving piece, a captured piece and an en-passant victim are applied;
/// a castling rook stays put, which cannot change whether the king itself
/// is attacked.
pub fn leaves_king_attacked(game_state: &GameState, from: Square, to: Square, mover: Color) -> bool {
    let mut scratch = game_state.board;
    let Some(piece) = scratch.take(from) else {
        return true;
    };

    if piece.kind == PieceKind::Pawn && is_en_passant_capture(game_state, from, to, mover) {
        if let Some(victim) = en_passant_victim_square(from, to) {
            scratch.take(victim);
        }
    }
    scratch.set(to, Some(piece));

    is_square_attacked(&scratch, scratch.king_location(mover), mover.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square name should parse")
    }

    #[test]
    fn probing_a_pinned_piece_leaves_the_live_board_untouched() {
        let game = GameState::from_placements(
            &[
                (sq("e1"), Piece::new(Color::White, PieceKind::King)),
                (sq("e2"), Piece::new(Color::White, PieceKind::Rook)),
                (sq("e8"), Piece::new(Color::Black, PieceKind::Rook)),
                (sq("a8"), Piece::new(Color::Black, PieceKind::King)),
            ],
            Color::White,
        )
        .expect("valid position");
        let before = game.clone();

        assert!(leaves_king_attacked(&game, sq("e2"), sq("d2"), Color::White));
        assert!(!leaves_king_attacked(&game, sq("e2"), sq("e5"), Color::White));
        assert!(!leaves_king_attacked(&game, sq("e2"), sq("e8"), Color::White));
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_needs_the_passed_pawn() {
        let base = GameState::from_placements(
            &[
                (sq("e1"), Piece::new(Color::White, PieceKind::King)),
                (sq("e8"), Piece::new(Color::Black, PieceKind::King)),
                (sq("e5"), Piece::new(Color::White, PieceKind::Pawn)),
                (sq("d5"), Piece::new(Color::Black, PieceKind::Pawn)),
            ],
            Color::White,
        )
        .expect("valid position");

        let with_target = base.clone().with_en_passant_target(Some(sq("d6")));
        assert!(is_en_passant_capture(&with_target, sq("e5"), sq("d6"), Color::White));
        assert!(!is_en_passant_capture(&with_target, sq("e5"), sq("f6"), Color::White));
        assert!(!is_en_passant_capture(&base, sq("e5"), sq("d6"), Color::White));
    }
}
