use super::super::{Board, Color, Move, Square};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> impl Iterator<Item = (i8, i8)> {
        let (diagonal, straight): (&'static [(i8, i8)], &'static [(i8, i8)]) = match self {
            SliderType::Bishop => (&DIAGONALS, &[]),
            SliderType::Rook => (&[], &ORTHOGONALS),
            SliderType::Queen => (&DIAGONALS, &ORTHOGONALS),
        };
        diagonal.iter().chain(straight).copied()
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for (d_row, d_col) in slider.directions() {
            let mut cursor = from.offset(d_row, d_col);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cursor = to.offset(d_row, d_col);
            }
        }
        moves
    }

    /// Walk the ray from `from` towards `target`; every square strictly
    /// between them must be empty.
    pub(crate) fn slider_attacks(&self, from: Square, target: Square, slider: SliderType) -> bool {
        let d_row = target.row() as i8 - from.row() as i8;
        let d_col = target.col() as i8 - from.col() as i8;
        let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
        if !aligned {
            return false;
        }
        let step = (d_row.signum(), d_col.signum());
        if !slider.directions().any(|dir| dir == step) {
            return false;
        }

        let mut cursor = from.offset(step.0, step.1);
        while let Some(sq) = cursor {
            if sq == target {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            cursor = sq.offset(step.0, step.1);
        }
        false
    }
}
