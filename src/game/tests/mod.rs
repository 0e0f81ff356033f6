//! Game module tests.
//!
//! - `castling.rs` - castling availability and rejections
//! - `en_passant.rs` - en passant window and capture
//! - `legality.rs` - king-safety filtering, turn order and error reporting
//! - `perft.rs` - leaf counts for reference positions
//! - `proptest.rs` - invariants over random playouts

mod perft;
mod proptest;

use crate::board::{Move, Square};
use crate::game::Game;

pub(super) fn mv(notation: &str) -> Move {
    notation.parse().unwrap()
}

pub(super) fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

pub(super) fn play(game: &mut Game, moves: &[&str]) {
    for notation in moves {
        game.make_move(mv(notation))
            .unwrap_or_else(|e| panic!("{notation} rejected: {e}"));
    }
}
