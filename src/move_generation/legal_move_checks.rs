//! Square-control queries.
//!
//! "Control" is the set of squares a piece could capture on if an enemy stood
//! there: pawn diagonals regardless of occupancy, every knight and king step,
//! and slider rays up to and including the first blocker of either color.
//! Castling never controls anything, which keeps the attack test free of
//! recursion through the opponent's castling rules.

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Whether any piece of `attacker_color` controls `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    let holds = |position: Option<Position>, kinds: &[PieceKind]| {
        position
            .and_then(|p| board.piece_at(p))
            .is_some_and(|piece| piece.color == attacker_color && kinds.contains(&piece.kind))
    };

    // An attacking pawn sits one row behind the square, from its own point of view.
    let back = -attacker_color.pawn_direction();
    if holds(square.offset(-1, back), &[PieceKind::Pawn])
        || holds(square.offset(1, back), &[PieceKind::Pawn])
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dx, dy)| holds(square.offset(dx, dy), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(dx, dy)| holds(square.offset(dx, dy), &[PieceKind::King]))
    {
        return true;
    }

    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    if BISHOP_DIRECTIONS
        .iter()
        .any(|&dir| holds(first_blocker(board, square, dir), &diagonal))
    {
        return true;
    }

    let straight = [PieceKind::Rook, PieceKind::Queen];
    ROOK_DIRECTIONS
        .iter()
        .any(|&dir| holds(first_blocker(board, square, dir), &straight))
}

/// Squares controlled by the piece on `from`. Empty if `from` is empty.
pub fn controlled_squares(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => {
            let dir = piece.color.pawn_direction();
            out.extend(from.offset(-1, dir));
            out.extend(from.offset(1, dir));
        }
        PieceKind::Knight => {
            out.extend(KNIGHT_OFFSETS.iter().filter_map(|&(dx, dy)| from.offset(dx, dy)));
        }
        PieceKind::King => {
            out.extend(KING_OFFSETS.iter().filter_map(|&(dx, dy)| from.offset(dx, dy)));
        }
        PieceKind::Bishop => control_rays(board, from, &BISHOP_DIRECTIONS, &mut out),
        PieceKind::Rook => control_rays(board, from, &ROOK_DIRECTIONS, &mut out),
        PieceKind::Queen => control_rays(board, from, &QUEEN_DIRECTIONS, &mut out),
    }
    out
}

fn control_rays(board: &Board, from: Position, directions: &[(i8, i8)], out: &mut Vec<Position>) {
    for &(dx, dy) in directions {
        let mut cursor = from.offset(dx, dy);
        while let Some(to) = cursor {
            out.push(to);
            if board.piece_at(to).is_some() {
                break;
            }
            cursor = to.offset(dx, dy);
        }
    }
}

fn first_blocker(board: &Board, from: Position, (dx, dy): (i8, i8)) -> Option<Position> {
    let mut cursor = from.offset(dx, dy);
    while let Some(to) = cursor {
        if board.piece_at(to).is_some() {
            return Some(to);
        }
        cursor = to.offset(dx, dy);
    }
    None
}
