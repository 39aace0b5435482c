//! Attack and protection introspection for a single square.
//!
//! These answer "who attacks this piece", "who would recapture here", "what
//! does this piece attack" and "which friends does it cover". Evaluators and
//! callers inspecting a position use them; move generation does not.

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::controlled_squares;

impl Board {
    /// Enemy pieces (of `color`'s opponent) whose legal moves include `at`.
    pub fn attackers(&self, color: Color, at: Position) -> Vec<Position> {
        self.piece_positions(color.opposite())
            .into_iter()
            .filter(|&from| self.legal_moves(from).contains(&at))
            .collect()
    }

    /// Pieces of `color` that would recapture on `at`: the square is vacated
    /// on a copy and every remaining `color` piece controlling it is listed.
    /// This is square control, not legal moves, so a pinned piece still
    /// counts as a protector and pawns count through their diagonals.
    pub fn protectors(&self, color: Color, at: Position) -> Vec<Position> {
        let mut vacated = self.scratch_copy();
        vacated.set_square(at, None);

        vacated
            .piece_positions(color)
            .into_iter()
            .filter(|&from| controlled_squares(&vacated, from).contains(&at))
            .collect()
    }

    /// Legal destinations of the piece on `from` that hold an enemy piece.
    pub fn attacking(&self, from: Position) -> Vec<Position> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        self.legal_moves(from)
            .into_iter()
            .filter(|&to| self.piece_at(to).is_some_and(|p| p.color != piece.color))
            .collect()
    }

    /// Own pieces the piece on `from` covers, i.e. squares it would reach if
    /// friendly pieces could be captured.
    pub fn protecting(&self, from: Position) -> Vec<Position> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        controlled_squares(self, from)
            .into_iter()
            .filter(|&to| self.piece_at(to).is_some_and(|p| p.color == piece.color))
            .collect()
    }
}
