use std::ops::Deref;

use super::{Board, CastleSide, Move, Piece, PieceKind, Square};

/// Everything `revert_move` needs to undo one `apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    /// Piece that left `from`, before any promotion. `None` if `from` was empty
    pub(crate) moved: Option<Piece>,
    /// Captured piece and the square it was taken from
    pub(crate) captured: Option<(Square, Piece)>,
    /// Rook relocated by castling: (corner, landing square)
    pub(crate) rook_shift: Option<(Square, Square)>,
}

impl UnmakeInfo {
    /// The piece removed by the move, if any
    #[inline]
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }

    /// Square the captured piece stood on (differs from `to` for en passant)
    #[inline]
    #[must_use]
    pub fn captured_on(&self) -> Option<Square> {
        self.captured.map(|(sq, _)| sq)
    }

    /// The piece that moved, as it was before the move
    #[inline]
    #[must_use]
    pub fn moved(&self) -> Option<Piece> {
        self.moved
    }
}

impl Board {
    /// Move the piece on `mv.from` to `mv.to`.
    ///
    /// Special moves are recognised from the geometry of the move:
    /// - a pawn moving diagonally onto an empty square captures the piece
    ///   beside `to` on the `from` row (en passant);
    /// - a king moving two columns also moves its own rook from the corner on
    ///   that side to the square the king crossed, if that square is empty;
    /// - a set `promotion` replaces the moved piece at `to`.
    ///
    /// Nothing happens when `from` is empty.
    pub fn apply_move(&mut self, mv: Move) -> UnmakeInfo {
        let Some(moved) = self.remove(mv.from) else {
            return UnmakeInfo {
                moved: None,
                captured: None,
                rook_shift: None,
            };
        };

        let mut captured = self.remove(mv.to).map(|piece| (mv.to, piece));
        let mut rook_shift = None;

        match moved.kind {
            PieceKind::Pawn if captured.is_none() && mv.col_distance() == 1 => {
                let victim_sq = Square::at(mv.from.row(), mv.to.col());
                captured = self.remove(victim_sq).map(|piece| (victim_sq, piece));
            }
            PieceKind::King => {
                if let Some(side) = CastleSide::from_king_move(mv.from, mv.to) {
                    let corner = match side {
                        CastleSide::Queenside => Square::at(mv.from.row(), 1),
                        CastleSide::Kingside => Square::at(mv.from.row(), 8),
                    };
                    let landing = Square::at(mv.from.row(), (mv.from.col() + mv.to.col()) / 2);
                    let own_rook = Piece::new(moved.color, PieceKind::Rook);
                    if self.piece_at(corner) == Some(own_rook) && self.is_empty(landing) {
                        let _ = self.remove(corner);
                        self.place(landing, own_rook);
                        rook_shift = Some((corner, landing));
                    }
                }
            }
            _ => {}
        }

        let placed = match mv.promotion {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };
        self.place(mv.to, placed);

        UnmakeInfo {
            moved: Some(moved),
            captured,
            rook_shift,
        }
    }

    /// Exact inverse of [`Board::apply_move`].
    pub fn revert_move(&mut self, mv: Move, info: UnmakeInfo) {
        let Some(moved) = info.moved else {
            return;
        };

        let _ = self.remove(mv.to);
        self.place(mv.from, moved);

        if let Some((corner, landing)) = info.rook_shift {
            if let Some(rook) = self.remove(landing) {
                self.place(corner, rook);
            }
        }

        if let Some((sq, piece)) = info.captured {
            self.place(sq, piece);
        }
    }

    /// Apply `mv` for as long as the returned guard lives.
    ///
    /// The move is reverted when the guard is dropped, including during
    /// unwinding, so the board cannot be left in the simulated state.
    pub fn simulate(&mut self, mv: Move) -> Simulation<'_> {
        let info = self.apply_move(mv);
        Simulation {
            board: self,
            mv,
            info,
        }
    }
}

/// A move applied to a board, reverted on drop.
pub struct Simulation<'a> {
    board: &'a mut Board,
    mv: Move,
    info: UnmakeInfo,
}

impl Simulation<'_> {
    #[must_use]
    pub fn info(&self) -> UnmakeInfo {
        self.info
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.revert_move(self.mv, self.info);
    }
}
