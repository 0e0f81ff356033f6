//! Core chess types.
//!
//! - `Piece`, `PieceKind` and `Color` - chess pieces and colors
//! - `Square` - a (row, column) board coordinate
//! - `Move` - start, end and optional promotion
//! - `CastlingState` and `CastleSide` - castling eligibility

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingState};
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
