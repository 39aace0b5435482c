//! Full legal move generation pipeline.
//!
//! Dispatches to the per-piece pseudo-legal generators, then filters each
//! candidate by playing it on a scratch copy and rejecting any that leave the
//! mover's own king in check. No pin tracking or incremental check detection:
//! every candidate is simulated.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;

impl Board {
    /// Geometry- and occupancy-aware destinations for the piece on `from`,
    /// ignoring whether the mover's king would be left in check.
    pub fn pseudo_legal_moves(&self, from: Position) -> Vec<Position> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(28);
        match piece.kind {
            PieceKind::King => generate_king_moves(self, from, piece.color, &mut out),
            PieceKind::Knight => generate_knight_moves(self, from, piece.color, &mut out),
            PieceKind::Pawn => generate_pawn_moves(self, from, piece.color, &mut out),
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => {
                generate_slider_moves(self, from, piece, &mut out)
            }
        }
        out
    }

    /// Pseudo-legal destinations that do not leave the mover's king in check.
    /// Works for either color, regardless of whose turn it is.
    pub fn legal_moves(&self, from: Position) -> Vec<Position> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        self.pseudo_legal_moves(from)
            .into_iter()
            .filter(|&to| {
                let mut next = self.scratch_copy();
                next.apply_move_unchecked(from, to);
                !next.is_check(piece.color)
            })
            .collect()
    }

    /// Legal destinations for every piece of `color`; pieces with no legal
    /// move are omitted. Keys iterate rank by rank from a8, files a to h,
    /// the same order as `Position::all` and `piece_positions`.
    pub fn legal_moves_for(&self, color: Color) -> BTreeMap<Position, Vec<Position>> {
        self.piece_positions(color)
            .into_iter()
            .filter_map(|from| {
                let moves = self.legal_moves(from);
                (!moves.is_empty()).then_some((from, moves))
            })
            .collect()
    }

    /// Flattened `(from, to)` pairs for `color`, in `legal_moves_for` order.
    pub fn legal_move_pairs(&self, color: Color) -> Vec<(Position, Position)> {
        self.legal_moves_for(color)
            .into_iter()
            .flat_map(|(from, targets)| targets.into_iter().map(move |to| (from, to)))
            .collect()
    }

    /// Short-circuiting check for at least one legal move.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.piece_positions(color)
            .into_iter()
            .any(|from| !self.legal_moves(from).is_empty())
    }
}
