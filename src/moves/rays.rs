//! Ray tracing shared by the sliding pieces.
//!
//! A ray runs from (but excluding) its origin until it leaves the board or
//! reaches the first occupied square, which is included.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Appends every square the ray reaches, blocker included.
pub fn trace_ray(board: &Board, from: Square, step: (i8, i8), out: &mut Vec<Square>) {
    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        out.push(square);
        if !board.is_empty(square) {
            break;
        }
        current = square.offset(step.0, step.1);
    }
}

/// First occupied square along the ray, with its occupant.
pub fn first_piece_on_ray(board: &Board, from: Square, step: (i8, i8)) -> Option<(Square, Piece)> {
    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if let Some(piece) = board.piece_at(square) {
            return Some((square, piece));
        }
        current = square.offset(step.0, step.1);
    }
    None
}

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column, or diagonal.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let step = (
        (to.row() as i8 - from.row() as i8).signum(),
        (to.col() as i8 - from.col() as i8).signum(),
    );
    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square name should parse")
    }

    #[test]
    fn ray_stops_on_first_blocker_inclusive() {
        let board = Board::standard();
        let mut out = Vec::new();
        // a1 rook looking north hits its own pawn immediately.
        trace_ray(&board, sq("a1"), (-1, 0), &mut out);
        assert_eq!(out, vec![sq("a2")]);

        out.clear();
        trace_ray(&board, sq("d4"), (-1, 0), &mut out);
        assert_eq!(out, vec![sq("d5"), sq("d6"), sq("d7")]);
    }

    #[test]
    fn first_piece_on_ray_reports_occupant() {
        let board = Board::standard();
        let (square, piece) =
            first_piece_on_ray(&board, sq("e4"), (-1, 0)).expect("e-file has a black pawn");
        assert_eq!(square, sq("e7"));
        assert!(piece.is(Color::Black, PieceKind::Pawn));
        assert_eq!(first_piece_on_ray(&board, sq("a4"), (0, -1)), None);
    }

    #[test]
    fn path_clearance_ignores_endpoints() {
        let board = Board::standard();
        assert!(!path_is_clear(&board, sq("a1"), sq("a8")));
        assert!(path_is_clear(&board, sq("a3"), sq("a7")));
        assert!(path_is_clear(&board, sq("c1"), sq("d2")));
        assert!(!path_is_clear(&board, sq("c1"), sq("e3")));
    }
}
