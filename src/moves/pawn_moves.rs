use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Side, Square};

/// Squares a pawn of `side` standing on `square` attacks.
#[inline]
pub fn pawn_attack_targets(side: Side, square: Square) -> impl Iterator<Item = Square> {
    let d_row = pawn_direction(side);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}

/// Squares from which a pawn of `side` would attack `target`.
#[inline]
pub fn pawn_attack_origins(side: Side, target: Square) -> impl Iterator<Item = Square> {
    let d_row = -pawn_direction(side);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| target.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::{pawn_attack_origins, pawn_attack_targets};
    use crate::game_state::chess_types::Side;
    use crate::utils::algebraic::algebraic_to_square;

    fn names(squares: impl Iterator<Item = crate::game_state::chess_types::Square>) -> Vec<String> {
        let mut out: Vec<String> = squares.map(|s| s.to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = algebraic_to_square("e2").expect("e2");
        assert_eq!(names(pawn_attack_targets(Side::White, e2)), ["d3", "f3"]);
    }

    #[test]
    fn black_pawn_attacks_from_e7() {
        let e7 = algebraic_to_square("e7").expect("e7");
        assert_eq!(names(pawn_attack_targets(Side::Black, e7)), ["d6", "f6"]);
    }

    #[test]
    fn edge_pawn_has_one_attack_and_origins_invert_targets() {
        let a2 = algebraic_to_square("a2").expect("a2");
        assert_eq!(names(pawn_attack_targets(Side::White, a2)), ["b3"]);

        let d5 = algebraic_to_square("d5").expect("d5");
        assert_eq!(names(pawn_attack_origins(Side::White, d5)), ["c4", "e4"]);
        assert_eq!(names(pawn_attack_origins(Side::Black, d5)), ["c6", "e6"]);
    }
}
