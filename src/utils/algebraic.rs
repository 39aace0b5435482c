//! Position conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! top-down `Position`, reused by the notation codec and `Display` impls.

use crate::chess_errors::ChessError;
use crate::game_state::board_position::Position;

/// Convert algebraic notation (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let x = i32::from(file - b'a');
    let y = 8 - i32::from(rank - b'0');
    Position::new(x, y).ok_or_else(|| ChessError::InvalidAlgebraic(square.to_owned()))
}

/// Convert a position to algebraic notation (for example: "e4").
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.x());
    let rank_char = char::from(b'0' + (8 - position.y()));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::game_state::board_position::Position;

    #[test]
    fn round_trip_square_conversions() {
        let a8 = Position::new(0, 0).expect("a8 is on the board");
        let h1 = Position::new(7, 7).expect("h1 is on the board");

        assert_eq!(algebraic_to_position("a8").expect("a8 should parse"), a8);
        assert_eq!(algebraic_to_position("h1").expect("h1 should parse"), h1);
        assert_eq!(position_to_algebraic(a8), "a8");
        assert_eq!(position_to_algebraic(h1), "h1");

        let e4 = algebraic_to_position("e4").expect("e4 should parse");
        assert_eq!((e4.x(), e4.y()), (4, 4));
    }

    #[test]
    fn rejects_malformed_squares() {
        for text in ["", "e", "e44", "i4", "e9", "e0", "E4"] {
            assert!(algebraic_to_position(text).is_err(), "{text} should not parse");
        }
    }
}
