use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board knows nothing about turns or legality; it performs whatever
/// placement or move mutation it is asked to.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "BoardRecord", try_from = "BoardRecord")
)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
}

impl Board {
    /// Standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (i, kind) in BACK_RANK.iter().enumerate() {
            let col = i as u8 + 1;
            board.place(Square::at(1, col), Piece::new(Color::White, *kind));
            board.place(Square::at(8, col), Piece::new(Color::Black, *kind));
            board.place(Square::at(2, col), Piece::new(Color::White, PieceKind::Pawn));
            board.place(Square::at(7, col), Piece::new(Color::Black, PieceKind::Pawn));
        }
        board
    }

    /// Board with no pieces at all
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Put `piece` on `sq`, replacing whatever stood there
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Clear `sq`, returning the piece that stood there
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Squares holding a piece of `color`, in ascending square order
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> Vec<Square> {
        self.occupied()
            .filter(|(_, piece)| piece.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// All occupied squares with their pieces
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|piece| (Square::from_index(idx), piece)))
    }

    /// Square of `color`'s king, if there is one on the board
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.occupied()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}

/// Serialized form of a board: the occupied squares only.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct BoardRecord(Vec<PlacedPiece>);

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PlacedPiece {
    square: Square,
    piece: Piece,
}

#[cfg(feature = "serde")]
impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        BoardRecord(
            board
                .occupied()
                .map(|(square, piece)| PlacedPiece { square, piece })
                .collect(),
        )
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRecord> for Board {
    type Error = super::BoardRecordError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for PlacedPiece { square, piece } in record.0 {
            if !board.is_empty(square) {
                return Err(super::BoardRecordError::DuplicateSquare {
                    notation: square.to_string(),
                });
            }
            board.place(square, piece);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::new();
        assert_eq!(board.pieces_of(Color::White).len(), 16);
        assert_eq!(board.pieces_of(Color::Black).len(), 16);
        assert_eq!(board.king_square(Color::White), Some(Square::at(1, 5)));
        assert_eq!(board.king_square(Color::Black), Some(Square::at(8, 5)));
        assert_eq!(
            board.piece_at(Square::at(8, 4)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert!(board.is_empty(Square::at(4, 4)));
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::empty();
        let sq = Square::at(4, 4);
        let knight = Piece::new(Color::White, PieceKind::Knight);
        board.place(sq, knight);
        assert_eq!(board.piece_at(sq), Some(knight));
        assert_eq!(board.pieces_of(Color::White), vec![sq]);
        assert_eq!(board.remove(sq), Some(knight));
        assert_eq!(board.remove(sq), None);
        assert!(board.pieces_of(Color::White).is_empty());
    }

    #[test]
    fn test_no_king_on_empty_board() {
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_every_piece() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_duplicate_squares() {
        let json = r#"[
            {"square":[1,1],"piece":{"color":"White","kind":"Rook"}},
            {"square":[1,1],"piece":{"color":"Black","kind":"Rook"}}
        ]"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_off_board_square() {
        let json = r#"[{"square":[9,1],"piece":{"color":"White","kind":"Rook"}}]"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
