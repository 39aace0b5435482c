//! Named evaluator and strategy variants.
//!
//! Call sites pick variants by name (for example from command-line flags) and
//! the registry builds the boxed implementation, so adding a variant only
//! touches this file.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::engines::engine_minimax::MinimaxStrategy;
use crate::engines::engine_random::RandomStrategy;
use crate::engines::engine_trait::SearchStrategy;
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::search::board_scoring::{Evaluator, MaterialEvaluator, PositionalEvaluator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluatorKind {
    Material,
    Positional,
}

impl EvaluatorKind {
    pub const ALL: [EvaluatorKind; 2] = [EvaluatorKind::Material, EvaluatorKind::Positional];

    pub const fn name(self) -> &'static str {
        match self {
            EvaluatorKind::Material => "material",
            EvaluatorKind::Positional => "positional",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EvaluatorKind::Material => "Material only",
            EvaluatorKind::Positional => "Material with positional tables",
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvaluatorKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChessError::UnknownEvaluator(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Random,
    Minimax,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Random, StrategyKind::Minimax];

    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Minimax => "minimax",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StrategyKind::Random => "Random legal move",
            StrategyKind::Minimax => "Fixed-depth minimax",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChessError::UnknownStrategy(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub parallel_root: bool,
    /// Seed for the random strategy; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            parallel_root: false,
            seed: None,
        }
    }
}

pub fn build_evaluator(kind: EvaluatorKind) -> Box<dyn Evaluator> {
    match kind {
        EvaluatorKind::Material => Box::new(MaterialEvaluator),
        EvaluatorKind::Positional => Box::new(PositionalEvaluator),
    }
}

/// `evaluator` is only consulted by strategies that score positions.
pub fn build_strategy(
    kind: StrategyKind,
    evaluator: EvaluatorKind,
    config: &SearchConfig,
) -> Box<dyn SearchStrategy> {
    match kind {
        StrategyKind::Random => match config.seed {
            Some(seed) => Box::new(RandomStrategy::seeded(seed)),
            None => Box::new(RandomStrategy::new()),
        },
        StrategyKind::Minimax => Box::new(
            MinimaxStrategy::with_depth(build_evaluator(evaluator), config.depth)
                .parallel_root(config.parallel_root),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;

    #[test]
    fn names_parse_back_to_kinds() {
        for kind in EvaluatorKind::ALL {
            assert_eq!(kind.name().parse::<EvaluatorKind>(), Ok(kind));
        }
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>(), Ok(kind));
        }
        assert_eq!("Minimax".parse::<StrategyKind>(), Ok(StrategyKind::Minimax));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "greedy".parse::<StrategyKind>(),
            Err(ChessError::UnknownStrategy("greedy".to_owned()))
        );
        assert_eq!(
            "neural".parse::<EvaluatorKind>(),
            Err(ChessError::UnknownEvaluator("neural".to_owned()))
        );
    }

    #[test]
    fn built_variants_report_their_names() {
        assert_eq!(build_evaluator(EvaluatorKind::Material).name(), "material");
        assert_eq!(build_evaluator(EvaluatorKind::Positional).name(), "positional");

        let config = SearchConfig {
            depth: 0,
            seed: Some(3),
            ..SearchConfig::default()
        };
        for kind in StrategyKind::ALL {
            let mut strategy = build_strategy(kind, EvaluatorKind::Material, &config);
            assert_eq!(strategy.name(), kind.name());

            let board = Board::starting_position();
            let (from, to) = strategy.choose_move(&board).expect("start position has moves");
            assert!(board.legal_moves(from).contains(&to));
        }
    }

    #[test]
    fn default_config_searches_two_plies() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 2);
        assert!(!config.parallel_root);
        assert_eq!(config.seed, None);
    }
}
