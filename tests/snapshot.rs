//! Serialized snapshots carry the complete game state.
#![cfg(feature = "serde")]

use chess_rules::board::{CastleSide, Color, Move, PieceKind, Square};
use chess_rules::game::{Game, Outcome};
use chess_rules::session::{Match, MatchTable};

fn play(game: &mut Game, moves: &[&str]) {
    for notation in moves {
        game.make_move(notation.parse().unwrap()).unwrap();
    }
}

#[test]
fn game_round_trip_keeps_special_state() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h4", "h7h6", "h1h3"]);
    // Black to move; the white kingside rook has moved
    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.turn(), Color::Black);
    assert!(!restored
        .castling()
        .can_castle(Color::White, CastleSide::Kingside));
    assert!(restored
        .castling()
        .can_castle(Color::White, CastleSide::Queenside));
}

#[test]
fn restored_game_keeps_en_passant_window() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let json = serde_json::to_string(&game).unwrap();
    let mut restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.en_passant(), Some(Square::at(6, 4)));
    restored.make_move("e5d6".parse().unwrap()).unwrap();
    assert!(restored.board().is_empty(Square::at(5, 4)));
}

#[test]
fn finished_game_stays_finished() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(
        restored.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn move_wire_form_distinguishes_promotion() {
    let plain = Move::new(Square::at(7, 1), Square::at(8, 1));
    let queen = Move::with_promotion(Square::at(7, 1), Square::at(8, 1), PieceKind::Queen);

    let plain_json = serde_json::to_value(plain).unwrap();
    assert!(plain_json["promotion"].is_null());
    let queen_json = serde_json::to_string(&queen).unwrap();
    assert_ne!(serde_json::to_string(&plain).unwrap(), queen_json);
    assert_eq!(serde_json::from_str::<Move>(&queen_json).unwrap(), queen);
}

#[test]
fn off_board_square_is_rejected() {
    assert!(serde_json::from_str::<Square>("[0, 4]").is_err());
    assert!(serde_json::from_str::<Square>("[4, 9]").is_err());
    assert_eq!(
        serde_json::from_str::<Square>("[4, 5]").unwrap(),
        Square::at(4, 5)
    );
}

#[test]
fn match_snapshot_restores_seats() {
    let table = MatchTable::new();
    let id = table.create(Some("alice".into()), Some("bob".into()));
    table.submit_move(id, "alice", "e2e4".parse().unwrap()).unwrap();

    let snapshot = table.snapshot(id).unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
    assert_eq!(restored.player(Color::Black), Some("bob"));

    let other = MatchTable::new();
    let new_id = other.insert(restored);
    other
        .submit_move(new_id, "bob", "e7e5".parse().unwrap())
        .unwrap();
}
