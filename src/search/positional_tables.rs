//! Per-piece positional bonus tables.
//!
//! Each table is indexed `[rank_from_own_back_rank][file]`, so row 0 is the
//! rank a side's pieces start on and row 7 is the opponent's back rank. The
//! same table serves both colors; only the row lookup is mirrored.

use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;

pub type PositionalTable = [[f32; 8]; 8];

pub const PAWN_TABLE: PositionalTable = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.1, 0.1, 0.1, 0.2, 0.2, 0.1, 0.1, 0.1],
    [0.1, 0.1, 0.2, 0.3, 0.3, 0.2, 0.1, 0.1],
    [0.15, 0.2, 0.3, 0.4, 0.4, 0.3, 0.2, 0.15],
    [0.15, 0.2, 0.3, 0.4, 0.4, 0.3, 0.2, 0.15],
    [0.1, 0.15, 0.2, 0.3, 0.3, 0.2, 0.15, 0.1],
    [0.05, 0.1, 0.1, 0.2, 0.2, 0.1, 0.1, 0.05],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

pub const KNIGHT_TABLE: PositionalTable = [
    [0.05, 0.1, 0.15, 0.2, 0.2, 0.15, 0.1, 0.05],
    [0.1, 0.2, 0.25, 0.3, 0.3, 0.25, 0.2, 0.1],
    [0.15, 0.25, 0.3, 0.35, 0.35, 0.3, 0.25, 0.15],
    [0.2, 0.3, 0.35, 0.4, 0.4, 0.35, 0.3, 0.2],
    [0.2, 0.3, 0.35, 0.4, 0.4, 0.35, 0.3, 0.2],
    [0.15, 0.25, 0.3, 0.35, 0.35, 0.3, 0.25, 0.15],
    [0.1, 0.2, 0.25, 0.3, 0.3, 0.25, 0.2, 0.1],
    [0.05, 0.1, 0.15, 0.2, 0.2, 0.15, 0.1, 0.05],
];

pub const BISHOP_TABLE: PositionalTable = [
    [0.1, 0.15, 0.15, 0.2, 0.2, 0.15, 0.15, 0.1],
    [0.15, 0.2, 0.25, 0.3, 0.3, 0.25, 0.2, 0.15],
    [0.15, 0.25, 0.3, 0.35, 0.35, 0.3, 0.25, 0.15],
    [0.2, 0.3, 0.35, 0.4, 0.4, 0.35, 0.3, 0.2],
    [0.2, 0.3, 0.35, 0.4, 0.4, 0.35, 0.3, 0.2],
    [0.15, 0.25, 0.3, 0.35, 0.35, 0.3, 0.25, 0.15],
    [0.15, 0.2, 0.25, 0.3, 0.3, 0.25, 0.2, 0.15],
    [0.1, 0.15, 0.15, 0.2, 0.2, 0.15, 0.15, 0.1],
];

pub const ROOK_TABLE: PositionalTable = [
    [0.2, 0.2, 0.2, 0.3, 0.3, 0.2, 0.2, 0.2],
    [0.25, 0.25, 0.25, 0.3, 0.3, 0.25, 0.25, 0.25],
    [0.2, 0.2, 0.2, 0.3, 0.3, 0.2, 0.2, 0.2],
    [0.15, 0.15, 0.15, 0.25, 0.25, 0.15, 0.15, 0.15],
    [0.15, 0.15, 0.15, 0.25, 0.25, 0.15, 0.15, 0.15],
    [0.2, 0.2, 0.2, 0.3, 0.3, 0.2, 0.2, 0.2],
    [0.25, 0.25, 0.25, 0.3, 0.3, 0.25, 0.25, 0.25],
    [0.2, 0.2, 0.2, 0.3, 0.3, 0.2, 0.2, 0.2],
];

pub const QUEEN_TABLE: PositionalTable = [
    [0.2, 0.25, 0.25, 0.3, 0.3, 0.25, 0.25, 0.2],
    [0.25, 0.3, 0.3, 0.35, 0.35, 0.3, 0.3, 0.25],
    [0.25, 0.3, 0.35, 0.4, 0.4, 0.35, 0.3, 0.25],
    [0.3, 0.35, 0.4, 0.45, 0.45, 0.4, 0.35, 0.3],
    [0.3, 0.35, 0.4, 0.45, 0.45, 0.4, 0.35, 0.3],
    [0.25, 0.3, 0.35, 0.4, 0.4, 0.35, 0.3, 0.25],
    [0.25, 0.3, 0.3, 0.35, 0.35, 0.3, 0.3, 0.25],
    [0.2, 0.25, 0.25, 0.3, 0.3, 0.25, 0.25, 0.2],
];

// King safety tapers off as the king leaves its back rank.
pub const KING_TABLE: PositionalTable = [
    [0.4, 0.4, 0.35, 0.3, 0.3, 0.35, 0.4, 0.4],
    [0.45, 0.45, 0.4, 0.35, 0.35, 0.4, 0.45, 0.45],
    [0.3, 0.35, 0.35, 0.3, 0.3, 0.35, 0.35, 0.3],
    [0.2, 0.25, 0.3, 0.3, 0.3, 0.3, 0.25, 0.2],
    [0.15, 0.2, 0.25, 0.25, 0.25, 0.25, 0.2, 0.15],
    [0.1, 0.15, 0.2, 0.2, 0.2, 0.2, 0.15, 0.1],
    [0.05, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.05],
    [0.0, 0.05, 0.05, 0.05, 0.05, 0.05, 0.05, 0.0],
];

pub const fn table_for(kind: PieceKind) -> &'static PositionalTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Bonus for `piece` standing on `position`, mirrored so both colors read
/// the table from their own back rank.
#[inline]
pub fn positional_bonus(piece: Piece, position: Position) -> f32 {
    let row = match piece.color {
        Color::White => 7 - position.y(),
        Color::Black => position.y(),
    };
    table_for(piece.kind)[usize::from(row)][usize::from(position.x())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(square: &str) -> Position {
        Position::from_algebraic(square).expect("test square should parse")
    }

    #[test]
    fn bonus_is_mirrored_between_colors() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        let black_knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(
            positional_bonus(white_knight, at("b1")),
            positional_bonus(black_knight, at("b8"))
        );
        assert_eq!(
            positional_bonus(white_knight, at("e4")),
            positional_bonus(black_knight, at("e5"))
        );
    }

    #[test]
    fn king_prefers_its_own_back_ranks() {
        let king = Piece::new(Color::White, PieceKind::King);
        assert!(positional_bonus(king, at("g1")) > positional_bonus(king, at("e4")));
        assert_eq!(positional_bonus(king, at("a8")), 0.0);
    }

    #[test]
    fn pawn_table_is_zero_on_both_back_ranks() {
        assert!(PAWN_TABLE[0].iter().all(|&bonus| bonus == 0.0));
        assert!(PAWN_TABLE[7].iter().all(|&bonus| bonus == 0.0));
    }
}
