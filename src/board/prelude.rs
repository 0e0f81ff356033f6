//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.turn(), Color::White);
//! ```

pub use super::{Board, CastleSide, CastlingState, Color, FenError, Move, Piece, PieceKind, Square};
pub use crate::game::{Game, GameBuilder, GameError, GameStatus, InvalidMoveReason, Outcome};
