//! Head-to-head strategy match harness.
//!
//! Runs two `SearchStrategy` implementations against each other on a single
//! board, stopping on checkmate, any remis reason the board detects, or the
//! ply limit.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::SearchStrategy;
use crate::game_state::board::Board;
use crate::game_state::board_position::Position;
use crate::game_state::chess_types::Color;
use crate::game_state::outcome::{GameOutcome, RemisReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    Remis(RemisReason),
    MaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            MatchOutcome::Remis(_) | MatchOutcome::MaxPlies => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Log every ply at info level.
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub played_moves: Vec<(Position, Position)>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn plies(&self) -> usize {
        self.played_moves.len()
    }

    pub fn report(&self) -> String {
        let outcome = match self.outcome {
            MatchOutcome::WhiteWinCheckmate => "white wins by checkmate".to_owned(),
            MatchOutcome::BlackWinCheckmate => "black wins by checkmate".to_owned(),
            MatchOutcome::Remis(reason) => format!("remis by {reason}"),
            MatchOutcome::MaxPlies => "stopped at the ply limit".to_owned(),
        };
        format!(
            "{outcome} after {} plies (white {:.3} ms, black {:.3} ms) final={}",
            self.plies(),
            self.white_total_time_ns as f64 / 1_000_000.0,
            self.black_total_time_ns as f64 / 1_000_000.0,
            self.final_board.notation()
        )
    }
}

/// Play `white` against `black` from the standard starting position.
pub fn play_match(
    white: &mut dyn SearchStrategy,
    black: &mut dyn SearchStrategy,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_match_from(Board::starting_position(), white, black, config)
}

/// Play a match from a caller-provided board; the side to move on `board`
/// moves first.
pub fn play_match_from(
    mut board: Board,
    white: &mut dyn SearchStrategy,
    black: &mut dyn SearchStrategy,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let mut played_moves = Vec::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if let Some(outcome) = board.outcome() {
            let outcome = match outcome {
                GameOutcome::Checkmate { winner: Color::White } => MatchOutcome::WhiteWinCheckmate,
                GameOutcome::Checkmate { winner: Color::Black } => MatchOutcome::BlackWinCheckmate,
                GameOutcome::Remis(reason) => MatchOutcome::Remis(reason),
            };
            debug!(?outcome, plies = played_moves.len(), "match finished");
            return Ok(MatchResult {
                outcome,
                final_board: board,
                played_moves,
                white_total_time_ns,
                black_total_time_ns,
            });
        }

        let mover = board.turn;
        let started = Instant::now();
        let (from, to) = match mover {
            Color::White => white.choose_move(&board)?,
            Color::Black => black.choose_move(&board)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();
        match mover {
            Color::White => white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns),
            Color::Black => black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns),
        }

        board.make_move(from, to)?;
        played_moves.push((from, to));

        if config.verbose {
            info!(ply = played_moves.len(), %mover, %from, %to, "{}", board.notation());
        }
    }

    warn!(max_plies = config.max_plies, notation = %board.notation(), "match cut off at ply limit");
    Ok(MatchResult {
        outcome: MatchOutcome::MaxPlies,
        final_board: board,
        played_moves,
        white_total_time_ns,
        black_total_time_ns,
    })
}
