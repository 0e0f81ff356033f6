//! Special-move state and its per-move transition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{CastleSide, CastlingState, Move, Piece, PieceKind, Square};

/// Castling eligibility and the en passant target, as one value.
///
/// Never mutated in place: each committed move produces the next value
/// through [`SpecialState::after`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialState {
    pub castling: CastlingState,
    /// Square skipped by a pawn that advanced two squares on the previous move
    pub en_passant: Option<Square>,
}

impl SpecialState {
    #[must_use]
    pub const fn new(castling: CastlingState, en_passant: Option<Square>) -> Self {
        SpecialState {
            castling,
            en_passant,
        }
    }

    /// State after `moved` plays `mv`, capturing `captured` (piece and square).
    #[must_use]
    pub fn after(self, mv: Move, moved: Piece, captured: Option<(Square, Piece)>) -> Self {
        let mut castling = self.castling;

        match moved.kind {
            PieceKind::King => castling = castling.with_king_moved(moved.color),
            PieceKind::Rook => {
                if let Some((color, side)) = CastleSide::of_rook_home(mv.from) {
                    if color == moved.color {
                        castling = castling.with_rook_moved(color, side);
                    }
                }
            }
            _ => {}
        }

        // A rook taken on its home square can never castle
        if let Some((sq, victim)) = captured {
            if victim.kind == PieceKind::Rook {
                if let Some((color, side)) = CastleSide::of_rook_home(sq) {
                    if color == victim.color {
                        castling = castling.with_rook_moved(color, side);
                    }
                }
            }
        }

        let en_passant = (moved.kind == PieceKind::Pawn && mv.row_distance() == 2)
            .then(|| Square::at((mv.from.row() + mv.to.row()) / 2, mv.from.col()));

        SpecialState {
            castling,
            en_passant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_double_push_sets_target() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let next = SpecialState::default().after(mv("e2e4"), pawn, None);
        assert_eq!(next.en_passant, Some(Square::at(3, 5)));

        let black = Piece::new(Color::Black, PieceKind::Pawn);
        let next = SpecialState::default().after(mv("d7d5"), black, None);
        assert_eq!(next.en_passant, Some(Square::at(6, 4)));
    }

    #[test]
    fn test_any_other_move_clears_target() {
        let start = SpecialState::new(CastlingState::fresh(), Some(Square::at(3, 5)));
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(start.after(mv("g8f6"), knight, None).en_passant, None);

        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(start.after(mv("d7d6"), pawn, None).en_passant, None);
    }

    #[test]
    fn test_king_move_marks_king() {
        let king = Piece::new(Color::White, PieceKind::King);
        let next = SpecialState::default().after(mv("e1e2"), king, None);
        assert!(next.castling.king_moved(Color::White));
        assert!(!next.castling.king_moved(Color::Black));
    }

    #[test]
    fn test_rook_move_marks_only_its_side() {
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let next = SpecialState::default().after(mv("h1h3"), rook, None);
        assert!(next.castling.rook_moved(Color::White, CastleSide::Kingside));
        assert!(!next.castling.rook_moved(Color::White, CastleSide::Queenside));
        assert!(next.castling.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn test_rook_captured_at_home_is_marked() {
        let bishop = Piece::new(Color::White, PieceKind::Bishop);
        let victim = Piece::new(Color::Black, PieceKind::Rook);
        let next = SpecialState::default().after(
            mv("g7h8"),
            bishop,
            Some((Square::at(8, 8), victim)),
        );
        assert!(!next.castling.can_castle(Color::Black, CastleSide::Kingside));
        assert!(next.castling.can_castle(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn test_flags_never_reset() {
        let state = SpecialState::new(CastlingState::exhausted(), None);
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let next = state.after(mv("h3h1"), rook, None);
        assert!(next.castling.king_moved(Color::White));
        assert!(next.castling.king_moved(Color::Black));
    }
}
