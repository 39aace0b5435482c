//! Fixed-depth minimax without pruning.
//!
//! Every legal root move is played on a scratch copy. While depth remains,
//! the best reply found by the same search one ply shallower is played on
//! top of it, and the resulting leaf is scored by the evaluator. The root
//! maximizes for white and minimizes for black; the first candidate with a
//! strictly better score wins, so ties go to the earliest move in
//! `legal_move_pairs` order.

use rayon::prelude::*;

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::search::board_scoring::{Evaluator, Score};

pub type ScoredMove = ((Position, Position), Score);

/// Best move for the side to move, with the score of the line it leads to.
/// `None` when that side has no legal move.
pub fn best_move(board: &Board, evaluator: &dyn Evaluator, depth: u8) -> Option<ScoredMove> {
    let side = board.turn;
    board
        .legal_move_pairs(side)
        .into_iter()
        .map(|mv| (mv, score_line(board, mv, evaluator, depth)))
        .fold(None, |best, candidate| pick_better(side, best, candidate))
}

/// Same search with the root candidates scored on the rayon pool. Scores are
/// collected in generation order before the pick, so the result matches
/// `best_move` exactly.
pub fn best_move_parallel(
    board: &Board,
    evaluator: &dyn Evaluator,
    depth: u8,
) -> Option<ScoredMove> {
    let side = board.turn;
    let scored: Vec<ScoredMove> = board
        .legal_move_pairs(side)
        .into_par_iter()
        .map(|mv| (mv, score_line(board, mv, evaluator, depth)))
        .collect();

    scored
        .into_iter()
        .fold(None, |best, candidate| pick_better(side, best, candidate))
}

fn score_line(
    board: &Board,
    (from, to): (Position, Position),
    evaluator: &dyn Evaluator,
    depth: u8,
) -> Score {
    let mut line = board.scratch_copy();
    line.apply_move_unchecked(from, to);

    if depth > 0 {
        if let Some(((reply_from, reply_to), _)) = best_move(&line, evaluator, depth - 1) {
            line.apply_move_unchecked(reply_from, reply_to);
        }
    }
    evaluator.evaluate(&line)
}

#[inline]
fn pick_better(side: Color, best: Option<ScoredMove>, candidate: ScoredMove) -> Option<ScoredMove> {
    match best {
        None => Some(candidate),
        Some(current) if is_better(side, candidate.1, current.1) => Some(candidate),
        Some(current) => Some(current),
    }
}

#[inline]
fn is_better(side: Color, score: Score, incumbent: Score) -> bool {
    match side {
        Color::White => score > incumbent,
        Color::Black => score < incumbent,
    }
}
