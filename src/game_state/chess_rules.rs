//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position notation and
//! the thresholds used by draw classification and the default search.

/// Standard chess starting position in board notation.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move clock value at which the game is drawn by the fifty-move rule.
pub const FIFTY_MOVE_CLOCK_LIMIT: u32 = 50;

/// Occurrences of one position signature that make a repetition draw.
pub const REPETITION_DRAW_COUNT: usize = 3;

/// Default look-ahead of the minimax strategy.
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

/// File the king starts on, and the files the castling rooks start on.
pub const KING_HOME_FILE: u8 = 4;
pub const QUEEN_SIDE_ROOK_FILE: u8 = 0;
pub const KING_SIDE_ROOK_FILE: u8 = 7;
