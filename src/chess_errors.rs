//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type across the crate. Notation parsing,
//! move requests, strategy preconditions and registry lookups all report
//! through it so callers can match on one enum. Every variant is recoverable:
//! a failed parse yields no board, and a failed move leaves the board exactly
//! as it was.

use thiserror::Error;

use crate::game_state::board_position::Position;

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The board-notation string is structurally malformed (wrong field
    /// count, wrong rank count, rank not 8 squares wide, bad turn, castling,
    /// en-passant or clock field).
    #[error("invalid board notation: {0}")]
    InvalidFormat(String),

    /// A placement character that is neither a digit nor a piece symbol.
    #[error("invalid piece symbol '{0}' in board notation")]
    InvalidPiece(char),

    /// An algebraic square such as `e4` could not be decoded.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A move was requested from a square onto itself.
    #[error("cannot move from {0} onto the same square")]
    SameSquare(Position),

    /// A move was requested from an empty square.
    #[error("no piece on {0}")]
    NoPiece(Position),

    /// The destination is not among the legal moves of the piece.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// A strategy was asked to move for a side that has no legal move.
    /// Callers are expected to check for checkmate or stalemate first.
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("unknown evaluator: {0}")]
    UnknownEvaluator(String),

    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),
}

/// Convenience result alias for engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
