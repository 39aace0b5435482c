//! Game outcome classification: check, checkmate, stalemate and draws.
//!
//! `RemisReason` is the closed set of reasons a game can end without a
//! winner. Mutual consent and time-out are reported by the caller; the board
//! detects the other four.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_CLOCK_LIMIT, REPETITION_DRAW_COUNT};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemisReason {
    Stalemate,
    Repetition,
    FiftyMoveRule,
    InsufficientMaterial,
    MutualConsent,
    TimeOut,
}

impl RemisReason {
    pub const fn explanation(self) -> &'static str {
        match self {
            RemisReason::Stalemate => "stalemate",
            RemisReason::Repetition => "threefold repetition",
            RemisReason::FiftyMoveRule => "the fifty-move rule",
            RemisReason::InsufficientMaterial => "insufficient material",
            RemisReason::MutualConsent => "mutual consent",
            RemisReason::TimeOut => "time-out",
        }
    }
}

impl fmt::Display for RemisReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.explanation())
    }
}

/// Terminal state of a game, seen from the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Remis(RemisReason),
}

impl Board {
    /// `color`'s king is attacked. A board without that king counts as check.
    pub fn is_check(&self, color: Color) -> bool {
        match self.king_position(color) {
            Some(king) => is_square_attacked(self, king, color.opposite()),
            None => true,
        }
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_move(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_check(color) && !self.has_legal_move(color)
    }

    /// Both sides are down to a bare king, or a king with one bishop or one
    /// knight.
    pub fn has_insufficient_material(&self) -> bool {
        Color::ALL.into_iter().all(|color| {
            let extras: Vec<PieceKind> = self
                .piece_positions(color)
                .into_iter()
                .filter_map(|p| self.piece_at(p))
                .map(|piece| piece.kind)
                .filter(|&kind| kind != PieceKind::King)
                .collect();
            match extras.as_slice() {
                [] => true,
                [PieceKind::Bishop] | [PieceKind::Knight] => true,
                _ => false,
            }
        })
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.half_move_clock >= FIFTY_MOVE_CLOCK_LIMIT
    }

    /// The current position has occurred at least three times in the log.
    pub fn is_threefold_repetition(&self) -> bool {
        self.history.occurrences(&self.signature()) >= REPETITION_DRAW_COUNT
    }

    /// Why the game is drawn for the side to move, if it is.
    pub fn remis_reason(&self) -> Option<RemisReason> {
        if self.is_stalemate(self.turn) {
            Some(RemisReason::Stalemate)
        } else if self.has_insufficient_material() {
            Some(RemisReason::InsufficientMaterial)
        } else if self.is_fifty_move_draw() {
            Some(RemisReason::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(RemisReason::Repetition)
        } else {
            None
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.is_checkmate(self.turn) {
            return Some(GameOutcome::Checkmate {
                winner: self.turn.opposite(),
            });
        }
        self.remis_reason().map(GameOutcome::Remis)
    }
}
