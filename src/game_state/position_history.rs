//! Position signatures for repetition detection.
//!
//! A signature is everything that makes two positions "the same" for the
//! repetition rule: placement, side to move, both castling rights and the
//! en-passant target. Clocks are deliberately left out.

use crate::game_state::board_position::Position;
use crate::game_state::chess_types::{CastlingRights, Color, Piece};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionSignature {
    pub placement: [[Option<Piece>; 8]; 8],
    pub turn: Color,
    pub white: CastlingRights,
    pub black: CastlingRights,
    pub en_passant: Option<Position>,
}

/// Log of signatures, one per committed position.
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    signatures: Vec<PositionSignature>,
}

impl PositionHistory {
    pub fn starting_with(signature: PositionSignature) -> Self {
        Self {
            signatures: vec![signature],
        }
    }

    pub fn record(&mut self, signature: PositionSignature) {
        self.signatures.push(signature);
    }

    pub fn occurrences(&self, signature: &PositionSignature) -> usize {
        self.signatures.iter().filter(|s| *s == signature).count()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.signatures.len()
    }
}
