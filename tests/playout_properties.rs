//! Property tests over positions reached by random legal play.

use proptest::prelude::*;
use quince_chess::game_state::board::Board;
use quince_chess::game_state::chess_types::{Color, PieceKind};
use quince_chess::search::board_scoring::{Evaluator, MaterialEvaluator};

/// Plays up to `choices.len()` moves from the start, each picked by index
/// into the flattened legal move list. Stops early if the game is over.
fn play_out(choices: &[usize]) -> Board {
    let mut board = Board::starting_position();
    for &idx in choices {
        let moves = board.legal_move_pairs(board.turn);
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[idx % moves.len()];
        board.make_move(from, to).expect("generated move is legal");
    }
    board
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0usize..256, 0..40).prop_map(|choices| play_out(&choices))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn notation_round_trips(board in arb_board()) {
        let notation = board.notation();
        let parsed = Board::from_notation(&notation).expect("generated notation parses");
        prop_assert_eq!(&parsed, &board);
        prop_assert_eq!(parsed.notation(), notation);
    }

    #[test]
    fn each_side_keeps_exactly_one_king(board in arb_board()) {
        for color in Color::ALL {
            let kings = board
                .piece_positions(color)
                .into_iter()
                .filter(|&p| board.piece_at(p).is_some_and(|piece| piece.kind == PieceKind::King))
                .count();
            prop_assert_eq!(kings, 1);
        }
    }

    #[test]
    fn side_that_just_moved_is_never_in_check(board in arb_board()) {
        prop_assert!(!board.is_check(board.turn.opposite()));
    }

    #[test]
    fn every_legal_move_applies(board in arb_board()) {
        for (from, to) in board.legal_move_pairs(board.turn) {
            let mut next = board.clone();
            prop_assert!(next.make_move(from, to).is_ok());
            prop_assert_eq!(next.turn, board.turn.opposite());
        }
    }

    #[test]
    fn material_score_is_bounded(board in arb_board()) {
        // A side can never hold more than 9 queens, 2 rooks, 2 bishops, 2 knights.
        let score = MaterialEvaluator.evaluate(&board);
        prop_assert!(score.abs() <= 9.0 * 9.0 + 2.0 * 5.0 + 4.0 * 3.0);
    }
}
