//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! the `Evaluator` trait. Scores are white-positive: higher favors white
//! regardless of whose turn it is.

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::search::positional_tables::positional_bonus;

pub type Score = f32;

pub trait Evaluator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Contribution of a single square. Empty squares score zero.
    fn evaluate_square(&self, position: Position, board: &Board) -> Score;

    /// Whole-board score: the sum of every square's contribution.
    fn evaluate(&self, board: &Board) -> Score {
        Position::all()
            .map(|position| self.evaluate_square(position, board))
            .sum()
    }
}

/// Signed material count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn name(&self) -> &'static str {
        "material"
    }

    #[inline]
    fn evaluate_square(&self, position: Position, board: &Board) -> Score {
        board
            .piece_at(position)
            .map_or(0.0, |piece| piece.value() as Score)
    }
}

/// Material weighted by the per-piece positional tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalEvaluator;

impl Evaluator for PositionalEvaluator {
    fn name(&self) -> &'static str {
        "positional"
    }

    #[inline]
    fn evaluate_square(&self, position: Position, board: &Board) -> Score {
        board.piece_at(position).map_or(0.0, |piece| {
            piece.value() as Score * positional_bonus(piece, position)
        })
    }
}
