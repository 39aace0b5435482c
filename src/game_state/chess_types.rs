//! Core value types shared by the board, move generation and evaluators.
//!
//! Colors, piece kinds and pieces are small `Copy` values. Castling rights are
//! stored per side as two flags rather than a packed mask, because the board
//! exposes them directly to callers.

use std::fmt;

/// Side of a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Multiplier applied to material values: white counts positive,
    /// black negative.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }

    /// Row index of this side's back rank in board coordinates (row 0 is
    /// rank 8).
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row step a pawn of this color takes when advancing.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Fixed material value used by the evaluators.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::King => 100,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }

    /// Lowercase notation letter.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }
}

/// An immutable piece value. Equality is by (color, kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Notation symbol: uppercase for white, lowercase for black.
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Decode a single notation symbol; case selects the color.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if !symbol.is_ascii_alphabetic() {
            return None;
        }
        let kind = PieceKind::from_symbol(symbol)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }

    /// Material value signed by color (white positive).
    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value() * self.color.sign()
    }

    /// Display name such as "White King".
    pub fn name(self) -> String {
        format!("{} {}", self.color.name(), self.kind.name())
    }

    /// Image asset key such as "White_k".
    pub fn asset_name(self) -> String {
        format!("{}_{}", self.color.name(), self.kind.symbol())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Castling rights of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        king_side: true,
        queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        king_side: false,
        queen_side: false,
    };
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_follow_color_case() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        let black_queen = Piece::new(Color::Black, PieceKind::Queen);

        assert_eq!(white_knight.symbol(), 'N');
        assert_eq!(black_queen.symbol(), 'q');
        assert_eq!(Piece::from_symbol('N'), Some(white_knight));
        assert_eq!(Piece::from_symbol('q'), Some(black_queen));
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('3'), None);
    }

    #[test]
    fn values_are_signed_by_color() {
        assert_eq!(Piece::new(Color::White, PieceKind::Rook).value(), 5);
        assert_eq!(Piece::new(Color::Black, PieceKind::Rook).value(), -5);
        assert_eq!(Piece::new(Color::Black, PieceKind::King).value(), -100);
    }

    #[test]
    fn names_and_assets() {
        let piece = Piece::new(Color::White, PieceKind::King);
        assert_eq!(piece.name(), "White King");
        assert_eq!(piece.asset_name(), "White_k");
        assert_eq!(
            Piece::new(Color::Black, PieceKind::Pawn).asset_name(),
            "Black_p"
        );
    }
}
