//! Precomputed destination squares for the fixed-offset pieces.

use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .collect()
    })
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_targets_in_corner_and_center() {
        assert_eq!(KNIGHT_TARGETS[Square::at(1, 1).index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[Square::at(4, 4).index()].len(), 8);
    }

    #[test]
    fn test_king_targets_on_edge() {
        assert_eq!(KING_TARGETS[Square::at(1, 1).index()].len(), 3);
        assert_eq!(KING_TARGETS[Square::at(1, 5).index()].len(), 5);
        assert_eq!(KING_TARGETS[Square::at(5, 5).index()].len(), 8);
    }
}
