//! Direction tables and the two geometric primitives every piece generator
//! is built from: sliding along a ray and stepping by fixed offsets.

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// Slide from `from` along each direction until blocked. An enemy blocker is
/// included as a capture; an own blocker stops the ray before it.
pub fn slide_until_blocked(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dx, dy) in directions {
        let mut cursor = from.offset(dx, dy);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(to),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(dx, dy);
        }
    }
}

/// Fixed single-step offsets; off-board and own-occupied targets are skipped.
pub fn step_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dx, dy) in offsets {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        if board.piece_at(to).is_some_and(|p| p.color == color) {
            continue;
        }
        out.push(to);
    }
}

#[inline]
pub fn is_enemy_on(board: &Board, position: Position, color: Color) -> bool {
    board.piece_at(position).is_some_and(|p| p.color != color)
}
