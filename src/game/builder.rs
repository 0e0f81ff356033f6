//! Fluent builder for constructing game positions.
//!
//! Allows setting up a position piece by piece rather than parsing FEN.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PieceKind, Square};
//! use chess_rules::game::GameBuilder;
//!
//! let game = GameBuilder::new()
//!     .piece(Square::at(1, 5), Piece::new(Color::White, PieceKind::King))
//!     .piece(Square::at(8, 5), Piece::new(Color::Black, PieceKind::King))
//!     .piece(Square::at(2, 1), Piece::new(Color::White, PieceKind::Pawn))
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(game.legal_moves(Square::at(2, 1)).unwrap().len(), 2);
//! ```

use super::{Game, SpecialState};
use crate::board::{Board, CastlingState, Color, Piece, Square};

/// A fluent builder for [`Game`] positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingState,
    en_passant: Option<Square>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Empty board, White to move, no castling available.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingState::exhausted(),
            en_passant: None,
        }
    }

    /// The standard initial position with every castling option open.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::new(),
            castling: CastlingState::fresh(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing anything already on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.place(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        let _ = self.board.remove(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, castling: CastlingState) -> Self {
        self.castling = castling;
        self
    }

    /// Set the square skipped by the last two-square pawn advance.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant = None;
        self
    }

    /// Build the game. A position that is already checkmate or stalemate for
    /// the side to move comes back finished.
    #[must_use]
    pub fn build(self) -> Game {
        Game::from_parts(
            self.board,
            self.side_to_move,
            SpecialState::new(self.castling, self.en_passant),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use crate::game::Outcome;

    #[test]
    fn test_starting_position() {
        assert_eq!(GameBuilder::starting_position().build(), Game::new());
    }

    #[test]
    fn test_custom_position() {
        let game = GameBuilder::new()
            .piece(Square::at(1, 5), Piece::new(Color::White, PieceKind::King))
            .piece(Square::at(8, 5), Piece::new(Color::Black, PieceKind::King))
            .piece(Square::at(4, 4), Piece::new(Color::White, PieceKind::Queen))
            .side_to_move(Color::Black)
            .build();

        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.to_fen(), "4k3/8/8/8/3Q4/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn test_piece_replaces_and_clear_removes() {
        let sq = Square::at(4, 4);
        let game = GameBuilder::new()
            .piece(sq, Piece::new(Color::White, PieceKind::Knight))
            .piece(sq, Piece::new(Color::Black, PieceKind::Bishop))
            .build();
        assert_eq!(
            game.board().piece_at(sq),
            Some(Piece::new(Color::Black, PieceKind::Bishop))
        );

        let cleared = GameBuilder::starting_position().clear(Square::at(2, 5)).build();
        assert!(cleared.board().is_empty(Square::at(2, 5)));
    }

    #[test]
    fn test_en_passant_setting() {
        let target = Square::at(6, 4);
        let game = GameBuilder::starting_position().en_passant(target).build();
        assert_eq!(game.en_passant(), Some(target));
        let game = GameBuilder::starting_position()
            .en_passant(target)
            .clear_en_passant()
            .build();
        assert_eq!(game.en_passant(), None);
    }

    #[test]
    fn test_stalemate_position_is_finished() {
        let game = GameBuilder::new()
            .piece(Square::at(8, 1), Piece::new(Color::Black, PieceKind::King))
            .piece(Square::at(6, 2), Piece::new(Color::White, PieceKind::Queen))
            .piece(Square::at(1, 5), Piece::new(Color::White, PieceKind::King))
            .side_to_move(Color::Black)
            .build();
        assert_eq!(game.outcome(), Some(Outcome::Stalemate));
    }
}
