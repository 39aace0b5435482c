//! Mutable game-state aggregate.
//!
//! `Board` is the central model for the engine. It stores an 8x8 grid of
//! optional pieces, per-side castling rights, the en-passant target, the side
//! to move and both move counters. Move generation, move application and
//! outcome classification live in their own modules as further `impl Board`
//! blocks; this file covers construction, square access and the notation
//! round trip.
//!
//! Boards are plain values. Every speculative "try this move" path works on a
//! copy, so exploring one branch never leaks state into another.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board_position::Position;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::position_history::{PositionHistory, PositionSignature};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct Board {
    // [row][file], row 0 is rank 8.
    pub squares: [[Option<Piece>; 8]; 8],

    pub white: CastlingRights,
    pub black: CastlingRights,
    pub en_passant: Option<Position>,

    pub turn: Color,
    pub half_move_clock: u32,
    pub full_move_number: u32,

    pub(crate) history: PositionHistory,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces, white to move, no rights.
    pub fn empty() -> Self {
        let mut board = Self {
            squares: [[None; 8]; 8],
            white: CastlingRights::NONE,
            black: CastlingRights::NONE,
            en_passant: None,
            turn: Color::White,
            half_move_clock: 0,
            full_move_number: 1,
            history: PositionHistory::default(),
        };
        board.reset_history();
        board
    }

    pub fn starting_position() -> Self {
        // The constant always parses.
        Self::from_notation(STARTING_POSITION_FEN).unwrap_or_else(|_| Self::empty())
    }

    #[inline]
    pub fn from_notation(notation: &str) -> ChessResult<Self> {
        parse_fen(notation)
    }

    #[inline]
    pub fn notation(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[usize::from(position.y())][usize::from(position.x())]
    }

    #[inline]
    pub(crate) fn set_square(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[usize::from(position.y())][usize::from(position.x())] = piece;
    }

    /// Setup edit: put (or clear) a piece and restart the repetition log from
    /// the edited position.
    pub fn place(&mut self, position: Position, piece: Option<Piece>) {
        self.set_square(position, piece);
        self.reset_history();
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub(crate) fn castling_rights_mut(&mut self, color: Color) -> &mut CastlingRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Squares holding a piece of `color`, row by row from a8.
    pub fn piece_positions(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|&p| self.piece_at(p).is_some_and(|piece| piece.color == color))
            .collect()
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceKind::King);
        Position::all().find(|&p| self.piece_at(p) == Some(king))
    }

    pub fn signature(&self) -> PositionSignature {
        PositionSignature {
            placement: self.squares,
            turn: self.turn,
            white: self.white,
            black: self.black,
            en_passant: self.en_passant,
        }
    }

    /// Number of positions recorded in the repetition log.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop the repetition log and seed it with the current position.
    pub fn reset_history(&mut self) {
        self.history = PositionHistory::starting_with(self.signature());
    }

    /// Copy for speculative exploration. The repetition log is not carried
    /// over since hypothetical lines never ask for it.
    pub(crate) fn scratch_copy(&self) -> Self {
        Self {
            squares: self.squares,
            white: self.white,
            black: self.black,
            en_passant: self.en_passant,
            turn: self.turn,
            half_move_clock: self.half_move_clock,
            full_move_number: self.full_move_number,
            history: PositionHistory::default(),
        }
    }
}

// Equality covers exactly what the notation string carries.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.white == other.white
            && self.black == other.black
            && self.en_passant == other.en_passant
            && self.turn == other.turn
            && self.half_move_clock == other.half_move_clock
            && self.full_move_number == other.full_move_number
    }
}

impl Eq for Board {}

impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, position: Position) -> &Self::Output {
        &self.squares[usize::from(position.y())][usize::from(position.x())]
    }
}

impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
