use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, Square};

pub(super) fn knight_attacks(from: Square, target: Square) -> bool {
    KNIGHT_TARGETS[from.index()].contains(&target)
}

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> Vec<Move> {
        KNIGHT_TARGETS[from.index()]
            .iter()
            .filter(|&&to| self.is_open_for(to, color))
            .map(|&to| Move::new(from, to))
            .collect()
    }
}
