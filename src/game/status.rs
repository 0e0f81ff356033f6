//! Check, checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Game, Outcome};
use crate::board::{Board, Color, Square};

/// Situation of the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// The given color is in check and has a way out
    Check(Color),
    /// The given color is checkmated
    Checkmate(Color),
    /// The given color has no legal move and is not in check
    Stalemate(Color),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} is in checkmate"),
            GameStatus::Stalemate(color) => write!(f, "{color} is in stalemate"),
        }
    }
}

/// Whether `color`'s king stands on a square the opponent attacks.
/// A board without that king is never in check.
pub(crate) fn king_attacked(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .map_or(false, |king| board.is_square_attacked(king, color.opponent()))
}

impl Game {
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        king_attacked(&self.board, color)
    }

    /// Whether some opposing piece attacks `sq`, whatever stands on it
    #[must_use]
    pub fn is_in_danger(&self, color: Color, sq: Square) -> bool {
        self.board.is_square_attacked(sq, color.opponent())
    }

    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Status of the side to move
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let color = self.turn;
        let check = self.is_in_check(color);
        match (check, self.has_any_legal_move(color)) {
            (true, true) => GameStatus::Check(color),
            (true, false) => GameStatus::Checkmate(color),
            (false, false) => GameStatus::Stalemate(color),
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Outcome implied by the position for the side to move, if it is terminal
    pub(crate) fn detect_outcome(&self) -> Option<Outcome> {
        match self.status() {
            GameStatus::Checkmate(loser) => Some(Outcome::Checkmate {
                winner: loser.opponent(),
            }),
            GameStatus::Stalemate(_) => Some(Outcome::Stalemate),
            GameStatus::Ongoing | GameStatus::Check(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};

    #[test]
    fn test_no_king_is_never_in_check() {
        let mut board = Board::empty();
        board.place(Square::at(4, 4), Piece::new(Color::Black, PieceKind::Queen));
        assert!(!king_attacked(&board, Color::White));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Check(Color::White).to_string(), "White is in check");
        assert_eq!(GameStatus::Ongoing.to_string(), "ongoing");
    }

    #[test]
    fn test_new_game_is_ongoing() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert!(!game.is_in_check(Color::White));
        assert!(!game.is_in_danger(Color::White, Square::at(3, 5)));
        assert!(game.is_in_danger(Color::White, Square::at(6, 5)));
    }
}
