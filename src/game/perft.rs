use super::Game;
use crate::board::Move;

impl Game {
    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves_for(self.turn);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let Some(piece) = self.board.piece_at(mv.from) else {
                continue;
            };
            let mut next = self.clone();
            next.commit(mv, piece);
            nodes += next.perft(depth - 1);
        }

        nodes
    }

    /// Per-move leaf counts at `depth`, in move generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.legal_moves_for(self.turn)
            .into_iter()
            .filter_map(|mv| {
                let piece = self.board.piece_at(mv.from)?;
                let mut next = self.clone();
                next.commit(mv, piece);
                Some((mv, next.perft(depth - 1)))
            })
            .collect()
    }
}
