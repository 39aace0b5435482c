//! Random-move strategy.
//!
//! Picks a uniformly random piece among those with a legal move, then a
//! uniformly random destination for it. Mostly used for diagnostics and as a
//! weak sparring partner in bot matches.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::SearchStrategy;
use crate::game_state::board::Board;
use crate::game_state::board_position::Position;

pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<(Position, Position)> {
        let moves: Vec<(Position, Vec<Position>)> =
            board.legal_moves_for(board.turn).into_iter().collect();

        let (from, targets) = moves.choose(&mut self.rng).ok_or(ChessError::NoLegalMoves)?;
        let to = targets.choose(&mut self.rng).ok_or(ChessError::NoLegalMoves)?;

        debug!(strategy = self.name(), pieces = moves.len(), %from, %to, "random move chosen");
        Ok((*from, *to))
    }
}

#[cfg(test)]
mod tests {
    use super::RandomStrategy;
    use crate::chess_errors::ChessError;
    use crate::engines::engine_trait::SearchStrategy;
    use crate::game_state::board::Board;

    #[test]
    fn chosen_move_is_legal() {
        let board = Board::starting_position();
        let mut strategy = RandomStrategy::seeded(7);
        for _ in 0..20 {
            let (from, to) = strategy.choose_move(&board).expect("start position has moves");
            assert!(board.legal_moves(from).contains(&to));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::starting_position();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board).expect("start position has moves"),
                b.choose_move(&board).expect("start position has moves")
            );
        }
    }

    #[test]
    fn no_moves_is_an_error() {
        let mated =
            Board::from_notation("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 2")
                .expect("test FEN should parse");
        let mut strategy = RandomStrategy::seeded(1);
        assert_eq!(strategy.choose_move(&mated), Err(ChessError::NoLegalMoves));
    }
}
