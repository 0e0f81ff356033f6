use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Match, MoveReport, SessionError};
use crate::board::Move;
use crate::game::{Game, Outcome};

/// Identifier of a live match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchId(pub u64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared handle to one match
pub type SharedMatch = Arc<Mutex<Match>>;

/// Live matches, each behind its own lock.
///
/// The index lock is held only long enough to look a match up; moves in
/// different matches never contend.
#[derive(Debug, Default)]
pub struct MatchTable {
    next_id: AtomicU64,
    matches: Mutex<HashMap<MatchId, SharedMatch>>,
}

impl MatchTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a match from the standard position
    pub fn create(&self, white: Option<String>, black: Option<String>) -> MatchId {
        self.insert(Match::new(white, black))
    }

    /// Start a match from a prepared game
    pub fn create_from(&self, game: Game, white: Option<String>, black: Option<String>) -> MatchId {
        self.insert(Match::with_game(game, white, black))
    }

    /// Add an existing match, e.g. one restored from a snapshot
    pub fn insert(&self, game_match: Match) -> MatchId {
        let id = MatchId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.matches
            .lock()
            .insert(id, Arc::new(Mutex::new(game_match)));
        info!("match {id} created");
        id
    }

    pub fn get(&self, id: MatchId) -> Result<SharedMatch, SessionError> {
        self.matches
            .lock()
            .get(&id)
            .map(Arc::clone)
            .ok_or(SessionError::UnknownMatch { id })
    }

    /// Validate and play a move while holding the match lock throughout.
    pub fn submit_move(
        &self,
        id: MatchId,
        player: &str,
        mv: Move,
    ) -> Result<MoveReport, SessionError> {
        let game_match = self.get(id)?;
        let mut guard = game_match.lock();
        guard.submit_move(player, mv)
    }

    pub fn resign(&self, id: MatchId, player: &str) -> Result<Outcome, SessionError> {
        let game_match = self.get(id)?;
        let outcome = game_match.lock().resign(player)?;
        Ok(outcome)
    }

    pub fn leave(&self, id: MatchId, player: &str) -> Result<(), SessionError> {
        self.get(id)?.lock().leave(player)
    }

    /// Copy of the match as it stands, for persistence or display
    pub fn snapshot(&self, id: MatchId) -> Result<Match, SessionError> {
        let game_match = self.get(id)?;
        let copy = game_match.lock().clone();
        Ok(copy)
    }

    /// Drop a match from the table. Holders of its handle keep it alive.
    pub fn remove(&self, id: MatchId) -> Result<SharedMatch, SessionError> {
        let removed = self
            .matches
            .lock()
            .remove(&id)
            .ok_or(SessionError::UnknownMatch { id })?;
        info!("match {id} removed");
        Ok(removed)
    }

    /// Ids of every live match, ascending
    #[must_use]
    pub fn ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<MatchId> = self.matches.lock().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.lock().is_empty()
    }
}
