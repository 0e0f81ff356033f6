use super::super::{Board, Color, Move, Square, PROMOTION_PIECES};

/// Pawns capture one row forward, one column to either side
pub(super) fn pawn_attacks(from: Square, color: Color, target: Square) -> bool {
    target.row() as i8 - from.row() as i8 == color.pawn_direction()
        && target.col().abs_diff(from.col()) == 1
}

fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, color: Color) {
    if to.row() == color.pawn_promotion_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(Move::with_promotion(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

impl Board {
    /// Pushes and diagonal captures. En passant depends on the previous move
    /// and is added by the game layer.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                push_pawn_move(&mut moves, from, single, color);
                if from.row() == color.pawn_start_rank() {
                    if let Some(double) = single.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(target) = from.offset(dir, d_col) {
                if self.piece_at(target).is_some_and(|piece| piece.color != color) {
                    push_pawn_move(&mut moves, from, target, color);
                }
            }
        }

        moves
    }
}
