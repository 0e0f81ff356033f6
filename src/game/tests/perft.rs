use crate::game::Game;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn test_perft_start_position() {
    let game = Game::new();
    assert_eq!(game.perft(0), 1);
    assert_eq!(game.perft(1), 20);
    assert_eq!(game.perft(2), 400);
    assert_eq!(game.perft(3), 8902);
}

#[test]
fn test_perft_kiwipete() {
    let game = Game::from_fen(KIWIPETE).unwrap();
    assert_eq!(game.perft(1), 48);
    assert_eq!(game.perft(2), 2039);
}

#[test]
fn test_perft_en_passant_and_promotion_position() {
    // Position 3 of the usual perft suite
    let game = Game::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(game.perft(1), 14);
    assert_eq!(game.perft(2), 191);
    assert_eq!(game.perft(3), 2812);
}

#[test]
fn test_perft_divide_sums_to_perft() {
    let game = Game::from_fen(KIWIPETE).unwrap();
    let divide = game.perft_divide(2);
    assert_eq!(divide.len(), 48);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2039);
}
