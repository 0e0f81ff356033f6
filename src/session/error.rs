use std::fmt;

use super::MatchId;
use crate::board::Color;
use crate::game::{GameError, Outcome};

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No live match has this id
    UnknownMatch { id: MatchId },
    /// The player holds no seat in the match
    NotSeated { player: String },
    /// The player is seated, but not on the side to move
    NotYourTurn { player: String, turn: Color },
    /// The match has already ended
    GameOver { outcome: Outcome },
    /// The rules engine rejected the move
    Engine(GameError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownMatch { id } => write!(f, "No match with id {id}"),
            SessionError::NotSeated { player } => {
                write!(f, "{player} is not playing in this match")
            }
            SessionError::NotYourTurn { player, turn } => {
                write!(f, "Not {player}'s turn: {turn} to move")
            }
            SessionError::GameOver { outcome } => write!(f, "The game is over: {outcome}"),
            SessionError::Engine(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GameError> for SessionError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::GameOver { outcome } => SessionError::GameOver { outcome },
            other => SessionError::Engine(other),
        }
    }
}
