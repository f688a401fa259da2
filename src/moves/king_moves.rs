use crate::game_state::chess_types::Square;

/// King steps in generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[inline]
pub fn is_king_step(from: Square, to: Square) -> bool {
    let d_row = (from.row() as i8 - to.row() as i8).abs();
    let d_col = (from.col() as i8 - to.col() as i8).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}
