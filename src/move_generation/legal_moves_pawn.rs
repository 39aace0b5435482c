//! Pseudo-legal pawn moves.
//!
//! Single push onto an empty square, double push from the starting row when
//! both squares are empty, diagonal captures onto enemy pieces or onto the
//! current en-passant target. Promotion happens during move application.

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_enemy_on;

pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(0, dir) {
        if board.piece_at(one).is_none() {
            out.push(one);

            if from.y() == pawn_start_row(color) {
                if let Some(two) = one.offset(0, dir) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for dx in [-1, 1] {
        let Some(to) = from.offset(dx, dir) else {
            continue;
        };
        if is_enemy_on(board, to, color) || is_en_passant_capture(board, from, to) {
            out.push(to);
        }
    }
}

#[inline]
pub fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row a pawn of `color` promotes on.
#[inline]
pub fn promotion_row(color: Color) -> u8 {
    color.opposite().home_row()
}

/// A diagonal step onto the empty en-passant target.
pub fn is_en_passant_capture(board: &Board, from: Position, to: Position) -> bool {
    board.en_passant == Some(to) && from.x() != to.x() && board.piece_at(to).is_none()
}

/// Square of the pawn removed by an en-passant capture: the file of `to`,
/// the row of `from`.
#[inline]
pub fn en_passant_victim(from: Position, to: Position) -> Option<Position> {
    Position::new(i32::from(to.x()), i32::from(from.y()))
}
