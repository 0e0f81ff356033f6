//! Game rules on top of the board: turns, legality, special moves and
//! end-of-game detection.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameStatus};
//! use chess_rules::board::Move;
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.make_move(mv.parse::<Move>().unwrap()).unwrap();
//! }
//! assert!(game.is_over());
//! assert!(matches!(game.status(), GameStatus::Checkmate(_)));
//! ```

mod builder;
mod error;
mod fen;
mod legal;
mod perft;
mod play;
mod state;
mod status;

#[cfg(test)]
mod tests;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, CastlingState, Color, Square};

pub use builder::GameBuilder;
pub use error::{GameError, InvalidMoveReason};
pub use fen::START_FEN;
pub use state::SpecialState;
pub use status::GameStatus;

/// How a finished game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Resignation { winner: Color },
}

impl Outcome {
    /// Winning side, `None` for a stalemate
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Resignation { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
            Outcome::Resignation { winner } => write!(f, "{winner} wins by resignation"),
        }
    }
}

/// A game in progress: one board, the side to move, special-move state and
/// the outcome once the game has ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    turn: Color,
    special: SpecialState,
    outcome: Option<Outcome>,
}

impl Game {
    /// Standard starting position, White to move
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            special: SpecialState::new(CastlingState::fresh(), None),
            outcome: None,
        }
    }

    /// Assemble a game and settle its outcome from the position.
    pub(crate) fn from_parts(board: Board, turn: Color, special: SpecialState) -> Self {
        let mut game = Game {
            board,
            turn,
            special,
            outcome: None,
        };
        game.outcome = game.detect_outcome();
        game
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingState {
        self.special.castling
    }

    /// Square a pawn skipped with a two-square advance on the previous move
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.special.en_passant
    }

    #[inline]
    #[must_use]
    pub fn special_state(&self) -> SpecialState {
        self.special
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
