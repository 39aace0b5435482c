//! Board coordinate type.
//!
//! `x` is the file (0 = a), `y` is the row as stored, counted from the top of
//! the board: row 0 is rank 8 and row 7 is rank 1. Both stay in `0..8`; the
//! only constructors check the range, so a `Position` is always on the board.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

// Field order drives the derived `Ord`: rank by rank from a8, then by file,
// matching `Position::all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    y: u8,
    x: u8,
}

impl Position {
    /// Returns `None` when either coordinate falls outside the board.
    #[inline]
    pub fn new(x: i32, y: i32) -> Option<Self> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    pub fn from_algebraic(text: &str) -> Result<Self, ChessError> {
        algebraic_to_position(text)
    }

    /// Algebraic form: file letter followed by `8 - y`.
    pub fn algebraic(self) -> String {
        position_to_algebraic(self)
    }

    /// Neighbor `dx` files and `dy` rows away, if still on the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::new(i32::from(self.x) + i32::from(dx), i32::from(self.y) + i32::from(dy))
    }

    pub fn above(self) -> Option<Self> {
        self.offset(0, -1)
    }

    pub fn below(self) -> Option<Self> {
        self.offset(0, 1)
    }

    pub fn left(self) -> Option<Self> {
        self.offset(-1, 0)
    }

    pub fn right(self) -> Option<Self> {
        self.offset(1, 0)
    }

    /// All 64 squares, row by row from the top-left corner.
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..8).flat_map(|y| (0u8..8).map(move |x| Position { x, y }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.algebraic())
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(Position::new(-1, 0).is_none());
        assert!(Position::new(0, 8).is_none());
        assert!(Position::new(8, 3).is_none());
        assert!(Position::new(7, 7).is_some());
    }

    #[test]
    fn neighbors_stop_at_the_edge() {
        let corner = Position::new(0, 0).expect("a8 is on the board");
        assert_eq!(corner.above(), None);
        assert_eq!(corner.left(), None);
        assert_eq!(corner.below(), Position::new(0, 1));
        assert_eq!(corner.right(), Position::new(1, 0));
    }

    #[test]
    fn all_squares_are_visited_once() {
        let squares: Vec<Position> = Position::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].algebraic(), "a8");
        assert_eq!(squares[63].algebraic(), "h1");
    }

    #[test]
    fn ordering_matches_board_iteration() {
        let squares: Vec<Position> = Position::all().collect();
        assert!(squares.windows(2).all(|pair| pair[0] < pair[1]));

        let b2 = Position::from_algebraic("b2").expect("test square should parse");
        let a1 = Position::from_algebraic("a1").expect("test square should parse");
        assert!(b2 < a1, "rank 2 comes before rank 1");
    }
}
