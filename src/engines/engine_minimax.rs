use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::SearchStrategy;
use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::search::board_scoring::Evaluator;
use crate::search::minimax::{best_move, best_move_parallel};

/// Fixed-depth minimax over a pluggable evaluator.
pub struct MinimaxStrategy {
    evaluator: Box<dyn Evaluator>,
    depth: u8,
    parallel_root: bool,
}

impl MinimaxStrategy {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        Self::with_depth(evaluator, DEFAULT_SEARCH_DEPTH)
    }

    pub fn with_depth(evaluator: Box<dyn Evaluator>, depth: u8) -> Self {
        Self {
            evaluator,
            depth,
            parallel_root: false,
        }
    }

    /// Score root candidates on the rayon pool. The chosen move is unchanged.
    pub fn parallel_root(mut self, enabled: bool) -> Self {
        self.parallel_root = enabled;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn evaluator_name(&self) -> &'static str {
        self.evaluator.name()
    }
}

impl SearchStrategy for MinimaxStrategy {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<(Position, Position)> {
        let evaluator = self.evaluator.as_ref();
        let picked = if self.parallel_root {
            best_move_parallel(board, evaluator, self.depth)
        } else {
            best_move(board, evaluator, self.depth)
        };
        let ((from, to), score) = picked.ok_or(ChessError::NoLegalMoves)?;

        debug!(
            strategy = self.name(),
            evaluator = evaluator.name(),
            depth = self.depth,
            %from,
            %to,
            score,
            "minimax move chosen"
        );
        Ok((from, to))
    }
}
