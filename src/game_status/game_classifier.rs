//! Check, checkmate, stalemate and overall game-status classification.

use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_status::insufficient_material::{
    is_insufficient_material_with, InsufficientMaterialRule,
};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    Agreement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing { in_check: false } => write!(f, "in progress"),
            GameStatus::Ongoing { in_check: true } => write!(f, "in progress, check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Draw(DrawReason::Stalemate) => write!(f, "draw by stalemate"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
            GameStatus::Draw(DrawReason::Agreement) => write!(f, "draw by agreement"),
        }
    }
}

#[inline]
pub fn in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state.board(), game_state.king_location(color), color.opposite())
}

pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    in_check(game_state, color) && !has_any_legal_move(game_state, color)
}

pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !in_check(game_state, color) && !has_any_legal_move(game_state, color)
}

/// Status for the side to move. Checkmate wins over stalemate, which wins
/// over insufficient material; otherwise the game goes on.
pub fn classify(game_state: &GameState, rule: InsufficientMaterialRule) -> GameStatus {
    let side = game_state.side_to_move();
    let checked = in_check(game_state, side);

    if !has_any_legal_move(game_state, side) {
        return if checked {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Draw(DrawReason::Stalemate)
        };
    }

    if is_insufficient_material_with(game_state, rule) {
        return GameStatus::Draw(DrawReason::InsufficientMaterial);
    }

    GameStatus::Ongoing { in_check: checked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square name should parse")
    }

    fn position(pieces: &[(&str, Color, PieceKind)], side_to_move: Color) -> GameState {
        let placements: Vec<(Square, Piece)> = pieces
            .iter()
            .map(|(name, color, kind)| (sq(name), Piece::new(*color, *kind)))
            .collect();
        GameState::from_placements(&placements, side_to_move).expect("valid position")
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            apply_move(&mut game, sq(from), sq(to)).expect("scripted move");
        }
        assert!(in_check(&game, Color::White));
        assert!(is_checkmate(&game, Color::White));
        assert!(!is_stalemate(&game, Color::White));
        assert!(!is_checkmate(&game, Color::Black));
        assert_eq!(
            classify(&game, InsufficientMaterialRule::default()),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn back_rank_mate() {
        let game = position(
            &[
                ("g1", Color::White, PieceKind::King),
                ("f2", Color::White, PieceKind::Pawn),
                ("g2", Color::White, PieceKind::Pawn),
                ("h2", Color::White, PieceKind::Pawn),
                ("e1", Color::Black, PieceKind::Rook),
                ("e8", Color::Black, PieceKind::King),
            ],
            Color::White,
        );
        assert!(is_checkmate(&game, Color::White));

        let with_blocker = position(
            &[
                ("g1", Color::White, PieceKind::King),
                ("f2", Color::White, PieceKind::Pawn),
                ("g2", Color::White, PieceKind::Pawn),
                ("h2", Color::White, PieceKind::Pawn),
                ("d2", Color::White, PieceKind::Knight),
                ("e1", Color::Black, PieceKind::Rook),
                ("e8", Color::Black, PieceKind::King),
            ],
            Color::White,
        );
        // Nd2-f1 blocks
        assert!(in_check(&with_blocker, Color::White));
        assert!(!is_checkmate(&with_blocker, Color::White));
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let game = position(
            &[
                ("a1", Color::White, PieceKind::King),
                ("c2", Color::Black, PieceKind::King),
                ("b3", Color::Black, PieceKind::Queen),
            ],
            Color::White,
        );
        assert!(!in_check(&game, Color::White));
        assert!(is_stalemate(&game, Color::White));
        assert!(!is_checkmate(&game, Color::White));
        assert_eq!(
            classify(&game, InsufficientMaterialRule::default()),
            GameStatus::Draw(DrawReason::Stalemate)
        );
    }

    #[test]
    fn classify_reports_material_draws_and_checks() {
        let bare = position(
            &[
                ("e1", Color::White, PieceKind::King),
                ("e8", Color::Black, PieceKind::King),
                ("c1", Color::White, PieceKind::Bishop),
            ],
            Color::Black,
        );
        assert_eq!(
            classify(&bare, InsufficientMaterialRule::default()),
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        );

        let checked = position(
            &[
                ("e1", Color::White, PieceKind::King),
                ("e8", Color::Black, PieceKind::King),
                ("e4", Color::White, PieceKind::Rook),
            ],
            Color::Black,
        );
        assert_eq!(
            classify(&checked, InsufficientMaterialRule::default()),
            GameStatus::Ongoing { in_check: true }
        );
        assert_eq!(
            classify(&GameState::new_game(), InsufficientMaterialRule::default()),
            GameStatus::Ongoing { in_check: false }
        );
    }

    #[test]
    fn status_display() {
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "checkmate, white wins"
        );
        assert!(GameStatus::Draw(DrawReason::Agreement).is_finished());
        assert!(!GameStatus::Ongoing { in_check: true }.is_finished());
    }
}
