//! Square attack detection.
//!
//! Looks outward from the target square: each movement class is checked on
//! its own and the first hit wins. Sliding rays stop at the first occupied
//! square, which only counts when it holds a matching enemy slider.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_origins;
use crate::moves::rays::first_piece_on_ray;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        board
            .piece_at(sq)
            .is_some_and(|piece| piece.is(attacker_color, kind))
    };

    let slider_hit = |directions: [(i8, i8); 4], line_kind: PieceKind| {
        directions.into_iter().any(|step| {
            matches!(
                first_piece_on_ray(board, square, step),
                Some((_, piece)) if piece.color == attacker_color
                    && (piece.kind == line_kind || piece.kind == PieceKind::Queen)
            )
        })
    };

    if slider_hit(ROOK_DIRECTIONS, PieceKind::Rook) {
        return true;
    }
    if slider_hit(BISHOP_DIRECTIONS, PieceKind::Bishop) {
        return true;
    }
    if knight_targets(square).any(|sq| holds(sq, PieceKind::Knight)) {
        return true;
    }
    if pawn_attack_origins(square, attacker_color).any(|sq| holds(sq, PieceKind::Pawn)) {
        return true;
    }
    king_targets(square).any(|sq| holds(sq, PieceKind::King))
}

#[cfg(test)]
mod tests {
    use super::is_square_attacked;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square name should parse")
    }

    fn position(pieces: &[(&str, Color, PieceKind)]) -> Board {
        let placements: Vec<(Square, Piece)> = pieces
            .iter()
            .map(|(name, color, kind)| (sq(name), Piece::new(*color, *kind)))
            .collect();
        *GameState::from_placements(&placements, Color::White)
            .expect("test position should be valid")
            .board()
    }

    #[test]
    fn start_position_third_rank_is_covered_by_white_only() {
        let board = Board::standard();
        for name in ["a3", "d3", "h3"] {
            assert!(is_square_attacked(&board, sq(name), Color::White));
            assert!(!is_square_attacked(&board, sq(name), Color::Black));
        }
        assert!(!is_square_attacked(&board, sq("e4"), Color::White));
        assert!(is_square_attacked(&board, sq("f6"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_piece() {
        let board = position(&[
            ("e1", Color::White, PieceKind::King),
            ("e8", Color::Black, PieceKind::King),
            ("a4", Color::Black, PieceKind::Rook),
            ("c4", Color::White, PieceKind::Knight),
            ("h7", Color::Black, PieceKind::Queen),
        ]);
        assert!(is_square_attacked(&board, sq("b4"), Color::Black));
        assert!(is_square_attacked(&board, sq("c4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d4"), Color::Black));
        // queen diagonal h7-b1 passes c2
        assert!(is_square_attacked(&board, sq("c2"), Color::Black));
        assert!(is_square_attacked(&board, sq("e4"), Color::Black));
    }

    #[test]
    fn rook_does_not_attack_diagonally_and_bishop_not_orthogonally() {
        let board = position(&[
            ("a1", Color::White, PieceKind::King),
            ("h8", Color::Black, PieceKind::King),
            ("d4", Color::Black, PieceKind::Rook),
            ("d6", Color::Black, PieceKind::Bishop),
        ]);
        assert!(is_square_attacked(&board, sq("e5"), Color::Black));
        assert!(!is_square_attacked(&board, sq("c3"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d7"), Color::Black));
        assert!(is_square_attacked(&board, sq("h4"), Color::Black));
        assert!(is_square_attacked(&board, sq("f8"), Color::Black));
    }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        let board = position(&[
            ("a1", Color::White, PieceKind::King),
            ("h8", Color::Black, PieceKind::King),
            ("e4", Color::White, PieceKind::Pawn),
            ("c5", Color::Black, PieceKind::Pawn),
        ]);
        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));

        assert!(is_square_attacked(&board, sq("b4"), Color::Black));
        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d6"), Color::Black));
    }

    #[test]
    fn kings_and_knights_use_fixed_offsets() {
        let board = position(&[
            ("a1", Color::White, PieceKind::King),
            ("h8", Color::Black, PieceKind::King),
            ("d4", Color::White, PieceKind::Knight),
        ]);
        assert!(is_square_attacked(&board, sq("b2"), Color::White));
        assert!(is_square_attacked(&board, sq("e6"), Color::White));
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(!is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("g7"), Color::Black));
        assert!(!is_square_attacked(&board, sq("f6"), Color::Black));
    }
}
