//! Castling eligibility.
//!
//! Eligibility is tracked as "has this piece ever moved" rather than as
//! rights derived from what currently stands on a square. The flags only ever
//! go from `false` to `true`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// Column of both kings' home squares (the e-file)
const KING_HOME_COL: u8 = 5;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    /// Home square of the king for `color`
    #[inline]
    #[must_use]
    pub const fn king_home(color: Color) -> Square {
        Square::at(color.back_rank(), KING_HOME_COL)
    }

    /// Original square of this side's rook
    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        let col = match self {
            CastleSide::Queenside => 1,
            CastleSide::Kingside => 8,
        };
        Square::at(color.back_rank(), col)
    }

    /// Where the king lands
    #[inline]
    #[must_use]
    pub const fn king_destination(self, color: Color) -> Square {
        let col = match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 7,
        };
        Square::at(color.back_rank(), col)
    }

    /// Square the king crosses; the rook lands here too
    #[inline]
    #[must_use]
    pub const fn king_passes(self, color: Color) -> Square {
        let col = match self {
            CastleSide::Queenside => 4,
            CastleSide::Kingside => 6,
        };
        Square::at(color.back_rank(), col)
    }

    /// Squares strictly between king and rook, all of which must be empty
    #[must_use]
    pub fn between(self, color: Color) -> Vec<Square> {
        let cols: &[u8] = match self {
            CastleSide::Queenside => &[2, 3, 4],
            CastleSide::Kingside => &[6, 7],
        };
        cols.iter()
            .map(|&col| Square::at(color.back_rank(), col))
            .collect()
    }

    /// Side whose king ends on `to` when the king leaves `from` by two columns
    #[must_use]
    pub fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.row() != to.row() || from.col().abs_diff(to.col()) != 2 {
            return None;
        }
        Some(if to.col() > from.col() {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        })
    }

    /// Which original rook, if any, starts on `sq`
    #[must_use]
    pub fn of_rook_home(sq: Square) -> Option<(Color, CastleSide)> {
        Color::BOTH.into_iter().find_map(|color| {
            CastleSide::BOTH
                .into_iter()
                .find(|side| side.rook_home(color) == sq)
                .map(|side| (color, side))
        })
    }
}

/// Which castling pieces have moved (or, for rooks, been captured at home).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingState {
    white_king_moved: bool,
    black_king_moved: bool,
    white_queenside_rook_moved: bool,
    white_kingside_rook_moved: bool,
    black_queenside_rook_moved: bool,
    black_kingside_rook_moved: bool,
}

impl CastlingState {
    /// Nothing has moved yet; every castling option is open
    #[must_use]
    pub const fn fresh() -> Self {
        CastlingState {
            white_king_moved: false,
            black_king_moved: false,
            white_queenside_rook_moved: false,
            white_kingside_rook_moved: false,
            black_queenside_rook_moved: false,
            black_kingside_rook_moved: false,
        }
    }

    /// Both kings have moved; no castling for either side
    #[must_use]
    pub const fn exhausted() -> Self {
        CastlingState::fresh()
            .with_king_moved(Color::White)
            .with_king_moved(Color::Black)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => self.white_queenside_rook_moved,
            (Color::White, CastleSide::Kingside) => self.white_kingside_rook_moved,
            (Color::Black, CastleSide::Queenside) => self.black_queenside_rook_moved,
            (Color::Black, CastleSide::Kingside) => self.black_kingside_rook_moved,
        }
    }

    /// Neither the king nor this side's rook has moved
    #[inline]
    #[must_use]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[must_use]
    pub const fn with_king_moved(mut self, color: Color) -> Self {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
        self
    }

    #[must_use]
    pub const fn with_rook_moved(mut self, color: Color, side: CastleSide) -> Self {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => self.white_queenside_rook_moved = true,
            (Color::White, CastleSide::Kingside) => self.white_kingside_rook_moved = true,
            (Color::Black, CastleSide::Queenside) => self.black_queenside_rook_moved = true,
            (Color::Black, CastleSide::Kingside) => self.black_kingside_rook_moved = true,
        }
        self
    }
}
