//! Rook movement directions.

/// Orthogonal `(d_row, d_col)` steps.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
