//! Board-notation-to-Board parser.
//!
//! Builds a fully-populated `Board` from the six-field notation string:
//! placement, side to move, castling rights, en-passant target, half-move
//! clock and full-move number. Parsing either succeeds completely or returns
//! an error; no partially built board escapes.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        parts.as_slice()
    else {
        return Err(ChessError::InvalidFormat(format!(
            "expected 6 fields, found {}",
            parts.len()
        )));
    };

    let mut board = Board::empty();

    parse_placement(board_part, &mut board)?;
    board.turn = parse_side_to_move(side_part)?;
    let (white, black) = parse_castling_rights(castling_part)?;
    board.white = white;
    board.black = black;
    board.en_passant = parse_en_passant_square(en_passant_part)?;
    board.half_move_clock = halfmove_part.parse::<u32>().map_err(|_| {
        ChessError::InvalidFormat(format!("invalid half-move clock: {halfmove_part}"))
    })?;
    board.full_move_number = fullmove_part.parse::<u32>().map_err(|_| {
        ChessError::InvalidFormat(format!("invalid full-move number: {fullmove_part}"))
    })?;

    board.reset_history();
    Ok(board)
}

fn parse_placement(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFormat(format!(
            "placement must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFormat(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err(rank_width_error(row));
                }
                continue;
            }

            let piece = Piece::from_symbol(ch).ok_or(ChessError::InvalidPiece(ch))?;
            if file >= 8 {
                return Err(rank_width_error(row));
            }

            let position = Position::new(file as i32, row as i32)
                .ok_or_else(|| rank_width_error(row))?;
            board.set_square(position, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(rank_width_error(row));
        }
    }

    Ok(())
}

fn rank_width_error(row: usize) -> ChessError {
    ChessError::InvalidFormat(format!("rank {} does not sum to 8 squares", 8 - row))
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFormat(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<(CastlingRights, CastlingRights)> {
    let mut white = CastlingRights::NONE;
    let mut black = CastlingRights::NONE;

    if castling_part == "-" {
        return Ok((white, black));
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => white.king_side = true,
            'Q' => white.queen_side = true,
            'k' => black.king_side = true,
            'q' => black.queen_side = true,
            _ => {
                return Err(ChessError::InvalidFormat(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok((white, black))
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Position>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_position(en_passant_part)
        .map(Some)
        .map_err(|_| {
            ChessError::InvalidFormat(format!("invalid en-passant square: {en_passant_part}"))
        })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::board_position::Position;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
    use crate::utils::render_game_state::render_board;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_board(&board));

        assert_eq!(board.turn, Color::White);
        assert_eq!(board.full_move_number, 1);
        assert_eq!(board.half_move_clock, 0);
        assert_eq!(board.white, CastlingRights::ALL);
        assert_eq!(board.black, CastlingRights::ALL);
        assert_eq!(board.en_passant, None);
        assert_eq!(
            board.squares[0][0],
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(
            board.squares[7][4],
            Some(Piece::new(Color::White, PieceKind::King))
        );
    }

    #[test]
    fn parses_partial_rights_and_en_passant() {
        let board = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w Kq d6 0 3")
            .expect("FEN with en-passant target should parse");

        assert!(board.white.king_side);
        assert!(!board.white.queen_side);
        assert!(!board.black.king_side);
        assert!(board.black.queen_side);
        assert_eq!(board.en_passant, Position::from_algebraic("d6").ok());
        assert_eq!(board.full_move_number, 3);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0")
            .expect_err("five fields should fail");
        assert!(matches!(err, ChessError::InvalidFormat(_)));

        let err = parse_fen(&format!("{STARTING_POSITION_FEN} extra"))
            .expect_err("seven fields should fail");
        assert!(matches!(err, ChessError::InvalidFormat(_)));
    }

    #[test]
    fn rejects_wrong_rank_count_and_width() {
        let seven_ranks = "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(matches!(parse_fen(seven_ranks), Err(ChessError::InvalidFormat(_))));

        let overflow = "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(matches!(parse_fen(overflow), Err(ChessError::InvalidFormat(_))));

        let too_wide = "rnbqkbnr/pppppppp/8/8/4P4/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(matches!(parse_fen(too_wide), Err(ChessError::InvalidFormat(_))));

        let too_narrow = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(matches!(parse_fen(too_narrow), Err(ChessError::InvalidFormat(_))));
    }

    #[test]
    fn rejects_unknown_piece_symbol() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1";
        assert_eq!(parse_fen(fen), Err(ChessError::InvalidPiece('X')));
    }

    #[test]
    fn rejects_bad_scalar_fields() {
        let base = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        for fen in [
            format!("{base} x KQkq - 0 1"),
            format!("{base} w KQz - 0 1"),
            format!("{base} w KQkq e9 0 1"),
            format!("{base} w KQkq - -1 1"),
            format!("{base} w KQkq - 0 one"),
        ] {
            assert!(
                matches!(parse_fen(&fen), Err(ChessError::InvalidFormat(_))),
                "{fen} should be rejected"
            );
        }
    }
}
