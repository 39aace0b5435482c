//! Pseudo-legal queen, rook and bishop moves.
//!
//! All three are the same slide primitive over different direction sets.

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    slide_until_blocked, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

pub fn generate_slider_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Position>) {
    let directions: &[(i8, i8)] = match piece.kind {
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        _ => return,
    };
    slide_until_blocked(board, from, piece.color, directions, out);
}
