//! Six-field FEN for whole games.

use std::str::FromStr;

use super::{Game, SpecialState};
use crate::board::{Board, CastleSide, CastlingState, Color, FenError, Square};

/// Standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASTLING_LETTERS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::Kingside),
    ('Q', Color::White, CastleSide::Queenside),
    ('k', Color::Black, CastleSide::Kingside),
    ('q', Color::Black, CastleSide::Queenside),
];

impl Game {
    /// Parse a FEN string. The clock fields may be omitted and are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = Board::from_placement(parts[0])?;

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling = parse_castling(parts[2])?;

        let en_passant = match parts[3] {
            "-" => None,
            text => Some(
                text.parse::<Square>()
                    .ok()
                    // Only the side that just moved can have skipped a square
                    .filter(|sq| sq.row() == turn.opponent().en_passant_rank())
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })?,
            ),
        };

        Ok(Game::from_parts(
            board,
            turn,
            SpecialState::new(castling, en_passant),
        ))
    }

    /// FEN of the current position. Clocks are not tracked and are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let side = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };

        let castling = self.special.castling;
        let mut rights: String = CASTLING_LETTERS
            .iter()
            .filter(|(_, color, side)| castling.can_castle(*color, *side))
            .map(|(c, _, _)| *c)
            .collect();
        if rights.is_empty() {
            rights.push('-');
        }

        let en_passant = self
            .special
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {side} {rights} {en_passant} 0 1",
            self.board.placement()
        )
    }
}

/// `K` means the white king and kingside rook are unmoved; a king whose
/// color has neither letter counts as moved.
fn parse_castling(field: &str) -> Result<CastlingState, FenError> {
    let mut open = [[false; 2]; 2];
    if field != "-" {
        for c in field.chars() {
            let (_, color, side) = CASTLING_LETTERS
                .iter()
                .find(|(letter, _, _)| *letter == c)
                .ok_or(FenError::InvalidCastling { char: c })?;
            open[*color as usize][*side as usize] = true;
        }
    }

    let mut state = CastlingState::fresh();
    for color in Color::BOTH {
        let sides = open[color as usize];
        if !sides.iter().any(|&o| o) {
            state = state.with_king_moved(color);
        }
        for side in CastleSide::BOTH {
            if !sides[side as usize] {
                state = state.with_rook_moved(color, side);
            }
        }
    }
    Ok(state)
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}
