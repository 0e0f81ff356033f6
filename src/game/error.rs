//! Errors reported by the game layer.

use std::fmt;

use super::Outcome;
use crate::board::{Color, Move, Square};

/// Why `make_move` refused a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Nothing stands on the start square
    EmptySquare,
    /// The piece on the start square belongs to the side not on move
    WrongTurn { turn: Color },
    /// The move is not among the legal moves of that piece
    Illegal,
}

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Legal moves were requested for an empty square
    NoPieceAtSquare { square: Square },
    /// A move was rejected; the game is unchanged
    InvalidMove {
        mv: Move,
        reason: InvalidMoveReason,
    },
    /// The game has already ended
    GameOver { outcome: Outcome },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoPieceAtSquare { square } => {
                write!(f, "No piece at {square}")
            }
            GameError::InvalidMove { mv, reason } => match reason {
                InvalidMoveReason::EmptySquare => {
                    write!(f, "Invalid move '{mv}': no piece at {}", mv.from)
                }
                InvalidMoveReason::WrongTurn { turn } => {
                    write!(f, "Invalid move '{mv}': it is {turn}'s turn")
                }
                InvalidMoveReason::Illegal => write!(f, "Invalid move '{mv}'"),
            },
            GameError::GameOver { outcome } => write!(f, "The game is over: {outcome}"),
        }
    }
}

impl std::error::Error for GameError {}
