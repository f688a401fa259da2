use crate::game_state::chess_types::Square;

/// Knight jumps in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight targets from `from`, in `KNIGHT_OFFSETS` order.
#[inline]
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[inline]
pub fn is_knight_jump(from: Square, to: Square) -> bool {
    let d_row = (from.row() as i8 - to.row() as i8).abs();
    let d_col = (from.col() as i8 - to.col() as i8).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

#[cfg(test)]
mod tests {
    use super::{is_knight_jump, knight_targets};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4: Square = "d4".parse().expect("d4");
        assert_eq!(knight_targets(d4).count(), 8);
        assert!(knight_targets(d4).all(|to| is_knight_jump(d4, to)));
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let a1: Square = "a1".parse().expect("a1");
        let targets: Vec<String> = knight_targets(a1).map(|sq| sq.to_string()).collect();
        assert_eq!(targets, vec!["b3", "c2"]);
    }
}
