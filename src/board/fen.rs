//! Piece-placement field of FEN.

use super::error::FenError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string (`rnbqkbnr/pppppppp/...`).
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRowCount { rows: rows.len() });
        }

        // FEN lists row 8 first
        for (i, row_str) in rows.iter().enumerate() {
            let row = 8 - i as u8;
            let mut cols = 0usize;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    cols += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                cols += 1;
                if cols > 8 {
                    break;
                }
                board.place(Square::at(row, cols as u8), piece);
            }
            if cols != 8 {
                return Err(FenError::WrongColumnCount {
                    row: row as usize,
                    cols,
                });
            }
        }

        Ok(board)
    }

    /// Piece-placement field of FEN for this board.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (1..=8).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for col in 1..=8 {
                match self.piece_at(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}
