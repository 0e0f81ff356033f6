//! Property-based tests over random legal playouts.

use crate::board::Color;
use crate::game::{Game, GameStatus};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: no legal move leaves the mover's own king attacked, and the
    /// detection predicates stay mutually consistent along the way
    #[test]
    fn prop_random_playout_invariants(seed in any::<u64>(), plies in 1..=60usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        for _ in 0..plies {
            let mover = game.turn();
            for color in Color::BOTH {
                let mate = game.is_in_checkmate(color);
                let stale = game.is_in_stalemate(color);
                prop_assert!(!(mate && stale));
                if mate {
                    prop_assert!(game.is_in_check(color));
                }
                if stale {
                    prop_assert!(!game.is_in_check(color));
                }
            }

            let moves = game.legal_moves_for(mover);
            prop_assert_eq!(moves.is_empty(), game.is_over());
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };

            game.make_move(mv).unwrap();
            prop_assert!(!game.is_in_check(mover));
            prop_assert_eq!(game.turn(), mover.opponent());
        }
    }

    /// Property: a rejected move leaves the game untouched
    #[test]
    fn prop_rejected_move_changes_nothing(seed in any::<u64>(), plies in 0..=20usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..plies {
            let moves = game.legal_moves_for(game.turn());
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            game.make_move(mv).unwrap();
        }

        let mover = game.turn();
        let idle = game.board().pieces_of(mover.opponent());
        let Some(&from) = idle.choose(&mut rng) else {
            return Ok(());
        };
        let Some(mv) = game.board().pseudo_moves(from).into_iter().next() else {
            return Ok(());
        };

        let before = game.clone();
        prop_assert!(game.make_move(mv).is_err());
        prop_assert_eq!(&game, &before);
    }

    /// Property: status agrees with the individual predicates
    #[test]
    fn prop_status_matches_predicates(seed in any::<u64>(), plies in 0..=40usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..plies {
            let moves = game.legal_moves_for(game.turn());
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            game.make_move(mv).unwrap();
        }

        let color = game.turn();
        let expected = if game.is_in_checkmate(color) {
            GameStatus::Checkmate(color)
        } else if game.is_in_stalemate(color) {
            GameStatus::Stalemate(color)
        } else if game.is_in_check(color) {
            GameStatus::Check(color)
        } else {
            GameStatus::Ongoing
        };
        prop_assert_eq!(game.status(), expected);
    }
}
