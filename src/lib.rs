//! Chess rules engine: board representation, legal move generation,
//! check / checkmate / stalemate detection and a lock-per-match session
//! layer for multiplayer use.

pub mod board;
pub mod game;
pub mod session;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use game::{Game, GameBuilder, GameError, GameStatus, Outcome};
pub use session::{Match, MatchTable, SessionError};
