//! Strategy abstraction used by the match harness and the registry.
//!
//! A strategy looks at a board and proposes the `(from, to)` move for the
//! side to move. Callers apply the proposal through `Board::make_move`.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::board_position::Position;

pub trait SearchStrategy: Send {
    fn name(&self) -> &str;

    /// Fails with `ChessError::NoLegalMoves` when the side to move has no
    /// legal move; check `Board::outcome` first.
    fn choose_move(&mut self, board: &Board) -> ChessResult<(Position, Position)>;
}
