use serde::Deserialize;

use chess_rules::board::Move;
use chess_rules::game::{Game, GameStatus, Outcome};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn solve(problem: &Problem) -> Game {
    let mut game = Game::from_fen(&problem.fen).expect("invalid problem fen");
    assert!(!game.is_over(), "already finished: {}", problem.fen);

    let mv: Move = problem.moves.replace('-', "").parse().expect("invalid move");
    game.make_move(mv)
        .unwrap_or_else(|e| panic!("{} rejected in {}: {e}", problem.moves, problem.fen));
    game
}

#[test]
fn mate_in_one_suite() {
    let data = include_str!("data/problems.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid problems.json");

    let mut checked = 0;
    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let game = solve(problem);
        let loser = game.turn();
        assert!(
            game.is_in_checkmate(loser),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
        assert_eq!(game.status(), GameStatus::Checkmate(loser));
        assert_eq!(
            game.outcome(),
            Some(Outcome::Checkmate {
                winner: loser.opponent()
            })
        );
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn stalemate_in_one_suite() {
    let data = include_str!("data/problems.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid problems.json");

    for problem in set.problems.iter().filter(|p| p.kind == "Stalemate in One") {
        let game = solve(problem);
        assert!(
            game.is_in_stalemate(game.turn()),
            "stalemate failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
        assert_eq!(game.outcome(), Some(Outcome::Stalemate));
    }
}
