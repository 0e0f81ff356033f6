//! Chess board representation and piece geometry.
//!
//! A mailbox of 64 optional pieces, with exact apply/revert of move
//! mutations and per-piece geometric move generation. The board has no
//! knowledge of turns, castling history or check; see [`crate::game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let knight_moves = board.pseudo_moves(Square::at(1, 2));
//! assert_eq!(knight_moves.len(), 2);
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{BoardRecordError, FenError, MoveParseError, SquareError};
pub use make_unmake::{Simulation, UnmakeInfo};
pub use state::Board;
pub use types::{CastleSide, CastlingState, Color, Move, Piece, PieceKind, Square};

pub(crate) use types::PROMOTION_PIECES;
