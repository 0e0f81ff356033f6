use log::debug;

use super::{Game, GameError, InvalidMoveReason, Outcome};
use crate::board::{Color, Move, Piece};

impl Game {
    /// Play `mv` for the side to move.
    ///
    /// Either the move is committed (board, special state, turn and outcome
    /// all updated) or an error is returned and the game is unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        if let Some(outcome) = self.outcome {
            return Err(GameError::GameOver { outcome });
        }

        let invalid = |reason| GameError::InvalidMove { mv, reason };
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or_else(|| invalid(InvalidMoveReason::EmptySquare))?;
        if piece.color != self.turn {
            return Err(invalid(InvalidMoveReason::WrongTurn { turn: self.turn }));
        }
        if !self.legal_moves(mv.from)?.contains(&mv) {
            return Err(invalid(InvalidMoveReason::Illegal));
        }

        self.commit(mv, piece);
        self.outcome = self.detect_outcome();

        debug!("{} played {mv}", piece.color);
        if let Some(outcome) = self.outcome {
            debug!("game over: {outcome}");
        }
        Ok(())
    }

    /// Apply an already validated move and hand the turn over.
    /// Outcome detection is left to the caller.
    pub(crate) fn commit(&mut self, mv: Move, piece: Piece) {
        let info = self.board.apply_move(mv);
        self.special = self.special.after(mv, piece, info.captured);
        self.turn = self.turn.opponent();
    }

    /// `color` concedes; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<Outcome, GameError> {
        if let Some(outcome) = self.outcome {
            return Err(GameError::GameOver { outcome });
        }
        let outcome = Outcome::Resignation {
            winner: color.opponent(),
        };
        self.outcome = Some(outcome);
        debug!("{color} resigned");
        Ok(outcome)
    }
}
