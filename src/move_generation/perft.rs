//! Perft node counting over the legal move generator.
//!
//! Pawns reaching the last rank always become queens, so counts differ from
//! published tables only in positions where under-promotion is reachable.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;

pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_move_pairs(board.turn);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|(from, to)| {
            let mut next = board.scratch_copy();
            next.apply_move_unchecked(from, to);
            perft(&next, depth - 1)
        })
        .sum()
}

/// Node counts per root move, for locating generator bugs.
pub fn perft_divide(board: &Board, depth: u8) -> BTreeMap<(Position, Position), u64> {
    if depth == 0 {
        return BTreeMap::new();
    }
    board
        .legal_move_pairs(board.turn)
        .into_iter()
        .map(|(from, to)| {
            let mut next = board.scratch_copy();
            next.apply_move_unchecked(from, to);
            ((from, to), perft(&next, depth - 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::board::Board;

    fn board(fen: &str) -> Board {
        Board::from_notation(fen).expect("test FEN should parse")
    }

    #[test]
    fn starting_position_counts() {
        let start = Board::starting_position();
        assert_eq!(perft(&start, 0), 1);
        assert_eq!(perft(&start, 1), 20);
        assert_eq!(perft(&start, 2), 400);
        assert_eq!(perft(&start, 3), 8902);
    }

    #[test]
    fn rook_and_pawn_endgame_counts() {
        let game = board("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        assert_eq!(perft(&game, 1), 14);
        assert_eq!(perft(&game, 2), 191);
        assert_eq!(perft(&game, 3), 2812);
    }

    #[test]
    fn castling_heavy_middlegame_counts() {
        let game = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        assert_eq!(perft(&game, 1), 48);
        assert_eq!(perft(&game, 2), 2039);
    }

    #[test]
    fn divide_sums_to_perft() {
        let start = Board::starting_position();
        let divided = perft_divide(&start, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.values().sum::<u64>(), 400);
        assert!(divided.values().all(|&nodes| nodes == 20));
    }
}
