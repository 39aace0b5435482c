use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_rules::{KING_HOME_FILE, KING_SIDE_ROOK_FILE, QUEEN_SIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{step_targets, KING_OFFSETS};

pub fn generate_king_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_targets(board, from, color, &KING_OFFSETS, out);
    generate_castling_moves(board, from, color, out);
}

fn generate_castling_moves(
    board: &Board,
    king_from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    let row = color.home_row();
    if king_from.x() != KING_HOME_FILE || king_from.y() != row {
        return;
    }

    let rights = board.castling_rights(color);
    let enemy = color.opposite();
    let square = |file: u8| Position::new(i32::from(file), i32::from(row));
    let own_rook = Some(Piece::new(color, PieceKind::Rook));

    let path_clear = |files: &[u8]| {
        files
            .iter()
            .all(|&f| square(f).is_some_and(|p| board.piece_at(p).is_none()))
    };
    let path_safe = |files: &[u8]| {
        files
            .iter()
            .all(|&f| square(f).is_some_and(|p| !is_square_attacked(board, p, enemy)))
    };

    if rights.king_side
        && square(KING_SIDE_ROOK_FILE).and_then(|p| board.piece_at(p)) == own_rook
        && path_clear(&[5, 6])
        && path_safe(&[KING_HOME_FILE, 5, 6])
    {
        out.extend(square(6));
    }

    if rights.queen_side
        && square(QUEEN_SIDE_ROOK_FILE).and_then(|p| board.piece_at(p)) == own_rook
        && path_clear(&[1, 2, 3])
        && path_safe(&[KING_HOME_FILE, 3, 2])
    {
        out.extend(square(2));
    }
}
