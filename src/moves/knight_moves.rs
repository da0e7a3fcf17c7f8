use crate::game_state::chess_types::Square;

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

/// On-board squares a knight on `square` reaches, ignoring occupancy.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn knight_targets_from_d4_has_eight_squares() {
        let d4 = algebraic_to_square("d4").expect("d4 should parse");
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_targets_from_a1_has_two_squares() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!(knight_targets(a1).count(), 2);
    }
}
