//! Geometric move generation.
//!
//! Produces every square a piece could physically reach, ignoring whose turn
//! it is and whether the mover's king ends up in check. Legality filtering
//! and the special moves that depend on game history live in `crate::game`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, Piece, PieceKind, Square};

impl Board {
    /// Candidate moves for the piece on `from`. Empty if `from` is empty.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::Bishop => self.generate_slider_moves(from, piece.color, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(from, piece.color, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(from, piece.color, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(from, piece.color),
        }
    }

    /// Whether the piece on `from` could capture on `target`.
    ///
    /// What stands on `target` is ignored, so this also answers "does this
    /// piece defend `target`" and "may a king step onto `target`".
    #[must_use]
    pub fn attacks(&self, from: Square, target: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if from == target {
            return false;
        }
        match piece.kind {
            PieceKind::Pawn => pawns::pawn_attacks(from, piece.color, target),
            PieceKind::Knight => knights::knight_attacks(from, target),
            PieceKind::Bishop => self.slider_attacks(from, target, SliderType::Bishop),
            PieceKind::Rook => self.slider_attacks(from, target, SliderType::Rook),
            PieceKind::Queen => self.slider_attacks(from, target, SliderType::Queen),
            PieceKind::King => kings::king_attacks(from, target),
        }
    }

    /// Whether any piece of `attacker` attacks `square`
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.occupied()
            .filter(|(_, piece)| piece.color == attacker)
            .any(|(from, _)| self.attacks(from, square))
    }

    /// A target square is available to `color` if it is empty or holds an enemy
    #[inline]
    fn is_open_for(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq)
            .map_or(true, |Piece { color: other, .. }| other != color)
    }
}
