use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{step_targets, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::board_position::Position;
    use crate::game_state::chess_types::Color;

    fn at(square: &str) -> Position {
        Position::from_algebraic(square).expect("test square should parse")
    }

    #[test]
    fn corner_knight_has_two_targets() {
        let board = Board::from_notation("4k3/8/8/8/8/8/8/N3K3 w - - 0 1")
            .expect("test FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&board, at("a1"), Color::White, &mut out);
        out.sort();

        let mut expected = vec![at("b3"), at("c2")];
        expected.sort();
        assert_eq!(out, expected);
    }

    #[test]
    fn own_pieces_block_and_enemy_pieces_are_targets() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        generate_knight_moves(&board, at("g1"), Color::White, &mut out);
        out.sort();

        let mut expected = vec![at("f3"), at("h3")];
        expected.sort();
        assert_eq!(out, expected);

        let board = Board::from_notation("4k3/8/8/8/8/5p2/8/4K1N1 w - - 0 1")
            .expect("test FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&board, at("g1"), Color::White, &mut out);
        assert!(out.contains(&at("f3")));
        assert!(out.contains(&at("e2")));
        assert_eq!(out.len(), 3);
    }
}
