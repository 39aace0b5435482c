//! Move application.
//!
//! `make_move` is the validated, committing entry point. It rejects requests
//! whose destination is not among the legal moves of the piece and leaves
//! the board untouched on failure. The turn is not gated: whichever side
//! moves, the turn flips afterwards. `apply_move_unchecked` performs the state
//! update itself and is shared with the legality filter, search and perft,
//! which only ever feed it moves they generated.

use tracing::trace;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_rules::{KING_SIDE_ROOK_FILE, QUEEN_SIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::{en_passant_victim, promotion_row};

impl Board {
    pub fn make_move(&mut self, from: Position, to: Position) -> ChessResult<()> {
        if from == to {
            return Err(ChessError::SameSquare(from));
        }
        if self.piece_at(from).is_none() {
            return Err(ChessError::NoPiece(from));
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(ChessError::IllegalMove { from, to });
        }

        self.apply_move_unchecked(from, to);
        let signature = self.signature();
        self.history.record(signature);

        trace!(%from, %to, notation = %self.notation(), "move committed");
        Ok(())
    }

    pub(crate) fn apply_move_unchecked(&mut self, from: Position, to: Position) {
        let Some(piece) = self.piece_at(from) else {
            return;
        };
        let mut is_capture = self.piece_at(to).is_some();

        // En-passant capture removes the enemy pawn beside the mover, if any.
        if piece.kind == PieceKind::Pawn && self.en_passant == Some(to) && from.x() != to.x() {
            let enemy_pawn = Piece::new(piece.color.opposite(), PieceKind::Pawn);
            if let Some(victim) = en_passant_victim(from, to) {
                if self.piece_at(victim) == Some(enemy_pawn) {
                    is_capture = true;
                    self.set_square(victim, None);
                }
            }
        }

        self.en_passant = None;
        if piece.kind == PieceKind::Pawn && from.y().abs_diff(to.y()) == 2 {
            self.en_passant =
                Position::new(i32::from(from.x()), (i32::from(from.y()) + i32::from(to.y())) / 2);
        }

        if piece.kind == PieceKind::Pawn || is_capture {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }

        update_castling_rights(self, piece, from);

        if piece.kind == PieceKind::King && from.x().abs_diff(to.x()) == 2 {
            let (rook_from, rook_to) = if to.x() > from.x() {
                (KING_SIDE_ROOK_FILE, 5)
            } else {
                (QUEEN_SIDE_ROOK_FILE, 3)
            };
            move_rook(self, from.y(), rook_from, rook_to);
        }

        if piece.color == Color::Black {
            self.full_move_number = self.full_move_number.saturating_add(1);
        }

        let placed = if piece.kind == PieceKind::Pawn && to.y() == promotion_row(piece.color) {
            Piece::new(piece.color, PieceKind::Queen)
        } else {
            piece
        };
        self.set_square(from, None);
        self.set_square(to, Some(placed));

        self.turn = self.turn.opposite();
    }
}

/// King moves drop both rights. Rook moves drop one right chosen by the file
/// the rook leaves from: file 0 is queen side, any other file king side.
fn update_castling_rights(board: &mut Board, piece: Piece, from: Position) {
    let rights = board.castling_rights_mut(piece.color);
    match piece.kind {
        PieceKind::King => *rights = CastlingRights::NONE,
        PieceKind::Rook if from.x() == QUEEN_SIDE_ROOK_FILE => rights.queen_side = false,
        PieceKind::Rook => rights.king_side = false,
        _ => {}
    }
}

fn move_rook(board: &mut Board, row: u8, from_file: u8, to_file: u8) {
    let (Some(from), Some(to)) = (
        Position::new(i32::from(from_file), i32::from(row)),
        Position::new(i32::from(to_file), i32::from(row)),
    ) else {
        return;
    };
    let rook = board.piece_at(from);
    board.set_square(from, None);
    board.set_square(to, rook);
}
