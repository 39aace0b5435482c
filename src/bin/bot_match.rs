//! Standalone bot-vs-bot match runner.
//!
//! Run with:
//! `cargo run --release --bin bot_match`
//! `cargo run --release --bin bot_match -- --white minimax --black random --evaluator positional --depth 2 --seed 7 --verbose`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use quince_chess::chess_errors::ChessError;
use quince_chess::engines::engine_registry::{
    build_strategy, EvaluatorKind, SearchConfig, StrategyKind,
};
use quince_chess::utils::bot_match::{play_match, MatchConfig};
use quince_chess::utils::render_game_state::render_board;
use tracing_subscriber::EnvFilter;

struct Args {
    white: StrategyKind,
    black: StrategyKind,
    evaluator: EvaluatorKind,
    search: SearchConfig,
    matches: MatchConfig,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        white: StrategyKind::Minimax,
        black: StrategyKind::Random,
        evaluator: EvaluatorKind::Positional,
        search: SearchConfig::default(),
        matches: MatchConfig::default(),
    };

    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().ok_or_else(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--white" => args.white = value()?.parse().map_err(|e: ChessError| e.to_string())?,
            "--black" => args.black = value()?.parse().map_err(|e: ChessError| e.to_string())?,
            "--evaluator" => {
                args.evaluator = value()?.parse().map_err(|e: ChessError| e.to_string())?
            }
            "--depth" => args.search.depth = value()?.parse().map_err(|e| format!("--depth: {e}"))?,
            "--seed" => {
                args.search.seed = Some(value()?.parse().map_err(|e| format!("--seed: {e}"))?)
            }
            "--max-plies" => {
                args.matches.max_plies = value()?.parse().map_err(|e| format!("--max-plies: {e}"))?
            }
            "--parallel" => args.search.parallel_root = true,
            "--verbose" | "-v" => args.matches.verbose = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args()?;
    let mut white = build_strategy(args.white, args.evaluator, &args.search);
    let mut black = build_strategy(args.black, args.evaluator, &args.search);

    println!(
        "white={} black={} evaluator={} depth={}",
        args.white.label(),
        args.black.label(),
        args.evaluator.label(),
        args.search.depth
    );

    let result =
        play_match(white.as_mut(), black.as_mut(), &args.matches).map_err(|e| e.to_string())?;

    println!("{}", render_board(&result.final_board));
    println!("{}", result.report());
    Ok(())
}
