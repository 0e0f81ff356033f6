//! Legal move generation: geometric candidates, special moves, then the
//! king-safety filter.

use log::trace;

use super::status::king_attacked;
use super::{Game, GameError};
use crate::board::{CastleSide, Color, Move, Piece, PieceKind, Square};

impl Game {
    /// Legal moves for the piece on `from`, whichever side it belongs to.
    ///
    /// Returns [`GameError::NoPieceAtSquare`] when `from` is empty, so an
    /// empty square can be told apart from a piece with no moves.
    pub fn legal_moves(&self, from: Square) -> Result<Vec<Move>, GameError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::NoPieceAtSquare { square: from })?;

        let mut candidates = self.board.pseudo_moves(from);
        match piece.kind {
            PieceKind::Pawn => candidates.extend(self.en_passant_capture(from, piece.color)),
            PieceKind::King => candidates.extend(self.castling_moves(from, piece.color)),
            _ => {}
        }

        let mut scratch = self.board.clone();
        let legal: Vec<Move> = candidates
            .into_iter()
            .filter(|&mv| {
                let after = scratch.simulate(mv);
                !king_attacked(&after, piece.color)
            })
            .collect();

        trace!("{} on {from}: {} legal moves", piece, legal.len());
        Ok(legal)
    }

    /// Every legal move for `color`, in ascending order of start square
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .into_iter()
            .filter_map(|sq| self.legal_moves(sq).ok())
            .flatten()
            .collect()
    }

    /// Whether `color` has at least one legal move
    pub(crate) fn has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .into_iter()
            .any(|sq| self.legal_moves(sq).map_or(false, |moves| !moves.is_empty()))
    }

    /// The en passant capture available to the pawn on `from`, if any.
    fn en_passant_capture(&self, from: Square, color: Color) -> Option<Move> {
        let target = self.special.en_passant?;
        if target.row() != color.opponent().en_passant_rank() {
            return None;
        }
        if i16::from(target.row()) - i16::from(from.row()) != i16::from(color.pawn_direction()) {
            return None;
        }
        if from.col().abs_diff(target.col()) != 1 {
            return None;
        }
        if !self.board.is_empty(target) {
            return None;
        }
        let victim = Square::at(from.row(), target.col());
        let enemy_pawn = Piece::new(color.opponent(), PieceKind::Pawn);
        (self.board.piece_at(victim) == Some(enemy_pawn)).then(|| Move::new(from, target))
    }

    /// Two-column king moves for each side still open to `color`.
    ///
    /// The king must stand on its home square and not be in check; the rook
    /// must be on its corner with nothing in between; neither the square the
    /// king crosses nor the one it lands on may be attacked.
    fn castling_moves(&self, from: Square, color: Color) -> Vec<Move> {
        if from != CastleSide::king_home(color) || self.is_in_check(color) {
            return Vec::new();
        }
        let own_rook = Piece::new(color, PieceKind::Rook);
        let castling = self.special.castling;

        CastleSide::BOTH
            .into_iter()
            .filter(|&side| castling.can_castle(color, side))
            .filter(|&side| self.board.piece_at(side.rook_home(color)) == Some(own_rook))
            .filter(|&side| side.between(color).into_iter().all(|sq| self.board.is_empty(sq)))
            .filter(|&side| {
                !self.is_in_danger(color, side.king_passes(color))
                    && !self.is_in_danger(color, side.king_destination(color))
            })
            .map(|side| Move::new(from, side.king_destination(color)))
            .collect()
    }
}
