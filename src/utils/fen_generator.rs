use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::position_to_algebraic;

pub fn generate_fen(board: &Board) -> String {
    let placement = generate_placement_field(board);
    let side_to_move = match board.turn {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(board.white, board.black);
    let en_passant = board
        .en_passant
        .map(position_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        placement, side_to_move, castling, en_passant, board.half_move_clock, board.full_move_number
    )
}

fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, rank) in board.squares.iter().enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            if let Some(piece) = square {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.symbol());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(white: CastlingRights, black: CastlingRights) -> String {
    let mut out = String::new();

    if white.king_side {
        out.push('K');
    }
    if white.queen_side {
        out.push('Q');
    }
    if black.king_side {
        out.push('k');
    }
    if black.queen_side {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);
        let reparsed = parse_fen(&generated).expect("generated FEN should parse");

        assert_eq!(generated, fen);
        assert_eq!(reparsed.turn, Color::Black);
        assert_eq!(reparsed.white, CastlingRights::NONE);
        assert_eq!(reparsed.black, CastlingRights::ALL);
        assert_eq!(reparsed.en_passant, None);
        assert_eq!(reparsed.half_move_clock, 4);
        assert_eq!(reparsed.full_move_number, 6);
    }

    #[test]
    fn castling_field_uses_fixed_order_and_dash() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w Qk - 0 1";
        let parsed = parse_fen(fen).expect("rights FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);

        let bare = "4k3/8/8/8/8/8/8/4K3 b - - 12 40";
        let parsed = parse_fen(bare).expect("bare kings FEN should parse");
        assert_eq!(generate_fen(&parsed), bare);
    }

    #[test]
    fn en_passant_target_is_serialized() {
        let fen = "rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2";
        let parsed = parse_fen(fen).expect("en-passant FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }
}
