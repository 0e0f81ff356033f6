use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, Move, Square};

pub(super) fn king_attacks(from: Square, target: Square) -> bool {
    KING_TARGETS[from.index()].contains(&target)
}

impl Board {
    /// One-square king steps. Castling depends on game history and is added
    /// by the game layer.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> Vec<Move> {
        KING_TARGETS[from.index()]
            .iter()
            .filter(|&&to| self.is_open_for(to, color))
            .map(|&to| Move::new(from, to))
            .collect()
    }
}
