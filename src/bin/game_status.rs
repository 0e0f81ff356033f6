use std::env;
use std::process::ExitCode;

use chess_rules::board::Move;
use chess_rules::game::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: game_status [--fen <fen>] <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let (mut game, moves) = match args.first().map(String::as_str) {
        Some("--fen") => {
            let Some(fen) = args.get(1) else {
                eprintln!("--fen needs a position");
                return ExitCode::FAILURE;
            };
            match Game::from_fen(fen) {
                Ok(game) => (game, &args[2..]),
                Err(e) => {
                    eprintln!("bad fen: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => (Game::new(), &args[..]),
    };

    for notation in moves {
        let mv = match notation.parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("{notation}: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = game.make_move(mv) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let side = game.turn();
    let legal_moves = game.legal_moves_for(side);
    println!("fen: {}", game.to_fen());
    println!("side_to_move: {}", side.to_string().to_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", game.is_in_check(side));
    println!("checkmate: {}", game.is_in_checkmate(side));
    println!("stalemate: {}", game.is_in_stalemate(side));
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
