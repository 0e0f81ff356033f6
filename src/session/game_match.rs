use log::{info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::SessionError;
use crate::board::{Color, Move};
use crate::game::{Game, GameStatus, Outcome};

/// Result of an accepted move, for broadcasting to both players
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveReport {
    /// Side that played the move
    pub color: Color,
    pub mv: Move,
    /// Status of the side now to move
    pub status: GameStatus,
}

/// One game between seated players.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    game: Game,
    white: Option<String>,
    black: Option<String>,
}

impl Match {
    /// New game from the standard start
    #[must_use]
    pub fn new(white: Option<String>, black: Option<String>) -> Self {
        Match::with_game(Game::new(), white, black)
    }

    #[must_use]
    pub fn with_game(game: Game, white: Option<String>, black: Option<String>) -> Self {
        Match { game, white, black }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Player seated on `color`
    #[must_use]
    pub fn player(&self, color: Color) -> Option<&str> {
        match color {
            Color::White => self.white.as_deref(),
            Color::Black => self.black.as_deref(),
        }
    }

    /// Colors `player` is seated on
    fn seats_of<'a>(&'a self, player: &'a str) -> impl Iterator<Item = Color> + 'a {
        Color::BOTH
            .into_iter()
            .filter(move |&color| self.player(color) == Some(player))
    }

    /// Play `mv` on behalf of `player`.
    ///
    /// The player must be seated on the side to move; the move itself is
    /// checked by [`Game::make_move`].
    pub fn submit_move(&mut self, player: &str, mv: Move) -> Result<MoveReport, SessionError> {
        if let Some(outcome) = self.game.outcome() {
            warn!("{player} tried {mv} after the game ended");
            return Err(SessionError::GameOver { outcome });
        }

        let turn = self.game.turn();
        if self.seats_of(player).next().is_none() {
            warn!("{player} tried {mv} without a seat");
            return Err(SessionError::NotSeated {
                player: player.to_string(),
            });
        }
        if self.player(turn) != Some(player) {
            warn!("{player} tried {mv} out of turn");
            return Err(SessionError::NotYourTurn {
                player: player.to_string(),
                turn,
            });
        }

        self.game.make_move(mv).map_err(|err| {
            warn!("{player} tried {mv}: {err}");
            SessionError::from(err)
        })?;

        Ok(MoveReport {
            color: turn,
            mv,
            status: self.game.status(),
        })
    }

    /// `player` concedes. When seated on both sides, the side to move resigns.
    pub fn resign(&mut self, player: &str) -> Result<Outcome, SessionError> {
        let turn = self.game.turn();
        let color = if self.player(turn) == Some(player) {
            turn
        } else {
            self.seats_of(player)
                .next()
                .ok_or_else(|| SessionError::NotSeated {
                    player: player.to_string(),
                })?
        };

        let outcome = self.game.resign(color)?;
        info!("{player} resigned as {color}: {outcome}");
        Ok(outcome)
    }

    /// Vacate every seat `player` holds. The game itself carries on.
    pub fn leave(&mut self, player: &str) -> Result<(), SessionError> {
        let mut left = false;
        for seat in [&mut self.white, &mut self.black] {
            if seat.as_deref() == Some(player) {
                *seat = None;
                left = true;
            }
        }
        if !left {
            return Err(SessionError::NotSeated {
                player: player.to_string(),
            });
        }
        info!("{player} left the match");
        Ok(())
    }
}
