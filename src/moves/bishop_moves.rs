//! Bishop movement directions.

/// Diagonal `(d_row, d_col)` steps.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
