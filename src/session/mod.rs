//! Multiplayer sessions: seats, turn enforcement and a table of live matches.
//!
//! The rules engine knows nothing about players. A [`Match`] pairs a
//! [`Game`](crate::game::Game) with the players seated on each color and
//! refuses moves from anyone not seated on the side to move. A
//! [`MatchTable`] keeps every live match behind its own lock.
//!
//! # Example
//! ```
//! use chess_rules::session::{MatchTable, SessionError};
//!
//! let table = MatchTable::new();
//! let id = table.create(Some("alice".into()), Some("bob".into()));
//! table.submit_move(id, "alice", "e2e4".parse().unwrap()).unwrap();
//! let err = table.submit_move(id, "alice", "d2d4".parse().unwrap());
//! assert!(matches!(err, Err(SessionError::NotYourTurn { .. })));
//! ```

mod error;
mod game_match;
mod table;

pub use error::SessionError;
pub use game_match::{Match, MoveReport};
pub use table::{MatchId, MatchTable, SharedMatch};
