//! Core game state representation.
//!
//! `GameState` is the single, exclusively owned value every engine operation
//! reads or mutates. It stores the board, turn and castling/en-passant flags,
//! the undo stack, and the observational captured-piece lists.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,

    // --- Side and state flags ---
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    // --- Apply/undo stacks ---
    pub(crate) move_history: Vec<MoveRecord>,
    /// Rights after each applied move; the first entry is the initial rights.
    pub(crate) castling_rights_log: Vec<CastlingRights>,

    // [color] kinds captured by that color, in capture order
    pub(crate) captured_by: [Vec<PieceKind>; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, full castling rights, empty history.
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Color::White, CastlingRights::ALL)
    }

    /// Builds a custom position with no castling rights and no en-passant
    /// target. Each color must have exactly one king.
    pub fn from_placements(placements: &[(Square, Piece)], side_to_move: Color) -> ChessResult<Self> {
        let mut board = Board::empty();
        for (square, piece) in placements {
            board.set(*square, Some(*piece));
        }

        // A later placement may overwrite a king; take king squares from the
        // finished board.
        let mut king_location = board.king_locations();
        for color in Color::BOTH {
            let kings: Vec<Square> = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .map(|(square, _)| square)
                .collect();
            match kings.as_slice() {
                [square] => king_location[color.index()] = *square,
                _ => {
                    return Err(ChessError::KingCount {
                        color,
                        count: kings.len(),
                    })
                }
            }
        }
        board.set_king_locations(king_location);

        Ok(Self::from_board(board, side_to_move, CastlingRights::NONE))
    }

    #[must_use]
    pub fn with_castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self.castling_rights_log = vec![rights];
        self
    }

    #[must_use]
    pub fn with_en_passant_target(mut self, target: Option<Square>) -> Self {
        self.en_passant_target = target;
        self
    }

    fn from_board(board: Board, side_to_move: Color, castling_rights: CastlingRights) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target: None,
            move_history: Vec::new(),
            castling_rights_log: vec![castling_rights],
            captured_by: [Vec::new(), Vec::new()],
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.board.king_location(color)
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    /// Initial rights followed by the rights after each applied move.
    #[inline]
    pub fn castling_rights_history(&self) -> &[CastlingRights] {
        &self.castling_rights_log
    }

    /// Kinds captured by `color`, oldest first.
    #[inline]
    pub fn captured_by(&self, color: Color) -> &[PieceKind] {
        &self.captured_by[color.index()]
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square name should parse")
    }

    #[test]
    fn new_game_has_full_rights_and_empty_history() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.castling_rights(), CastlingRights::ALL);
        assert_eq!(game.en_passant_target(), None);
        assert!(game.move_history().is_empty());
        assert!(game.captured_by(Color::White).is_empty());
        assert_eq!(game.king_location(Color::White), sq("e1"));
        assert_eq!(game.king_location(Color::Black), sq("e8"));
        assert_eq!(
            game.piece_at(sq("d1")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn from_placements_reads_king_squares_from_the_final_board() {
        let game = GameState::from_placements(
            &[
                (sq("e1"), Piece::new(Color::White, PieceKind::King)),
                (sq("a1"), Piece::new(Color::White, PieceKind::King)),
                (sq("a1"), Piece::new(Color::White, PieceKind::Rook)),
                (sq("e8"), Piece::new(Color::Black, PieceKind::King)),
                (sq("e5"), Piece::new(Color::Black, PieceKind::Rook)),
            ],
            Color::White,
        )
        .expect("the a1 king is overwritten, leaving one white king");

        assert_eq!(game.king_location(Color::White), sq("e1"));
        assert_eq!(game.king_location(Color::Black), sq("e8"));
        assert_eq!(
            game.piece_at(sq("a1")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert!(crate::game_status::game_classifier::in_check(&game, Color::White));
    }

    #[test]
    fn from_placements_requires_one_king_per_color() {
        let white_king = Piece::new(Color::White, PieceKind::King);
        let black_king = Piece::new(Color::Black, PieceKind::King);

        let missing = GameState::from_placements(&[(sq("e1"), white_king)], Color::White);
        assert_eq!(
            missing,
            Err(ChessError::KingCount {
                color: Color::Black,
                count: 0
            })
        );

        let doubled = GameState::from_placements(
            &[(sq("e1"), white_king), (sq("a1"), white_king), (sq("e8"), black_king)],
            Color::White,
        );
        assert_eq!(
            doubled,
            Err(ChessError::KingCount {
                color: Color::White,
                count: 2
            })
        );

        let ok = GameState::from_placements(&[(sq("b2"), white_king), (sq("g7"), black_king)], Color::Black)
            .expect("two kings should be a valid position");
        assert_eq!(ok.king_location(Color::White), sq("b2"));
        assert_eq!(ok.king_location(Color::Black), sq("g7"));
        assert_eq!(ok.side_to_move(), Color::Black);
        assert_eq!(ok.castling_rights(), CastlingRights::NONE);
    }
}
