//! Tournament CLI
//!
//! Run round robins or single games between strategies.
//!
//! A strategy that overruns its move budget forfeits, but its thread cannot
//! be stopped: it keeps running until `decide` returns, for the rest of the
//! process if it never does. Strategies that loop forever therefore cost one
//! busy thread per timed-out match and can slow the games that follow.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use strategies::StrategyRegistry;
use tournament::{
    check_match_limits, MatchConfig, MatchRecord, MatchRunner, Tournament, TournamentConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament")]
#[command(about = "Round-robin tournaments between chess bot strategies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full round robin
    Run {
        /// TOML configuration file; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        rounds: Option<u32>,
        /// Seconds allowed per move
        #[arg(long)]
        move_timeout: Option<f64>,
        /// Plies before a game is drawn
        #[arg(long)]
        move_limit: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Directory for PGN files and the summary
        #[arg(long)]
        output: Option<PathBuf>,
        /// Comma-separated strategy ids
        #[arg(long, value_delimiter = ',')]
        strategies: Vec<String>,
    },
    /// Play one game and print its PGN
    Match {
        white: String,
        black: String,
        #[arg(long, default_value = "0.5")]
        move_timeout: f64,
        #[arg(long, default_value = "500")]
        move_limit: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the available strategies
    List,
}

fn run_tournament(
    config_path: Option<PathBuf>,
    rounds: Option<u32>,
    move_timeout: Option<f64>,
    move_limit: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    strategies: Vec<String>,
) -> anyhow::Result<()> {
    let mut config = match &config_path {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::default(),
    };
    if let Some(rounds) = rounds {
        config.rounds = rounds;
    }
    if let Some(t) = move_timeout {
        config.move_timeout_seconds = t;
    }
    if let Some(limit) = move_limit {
        config.move_limit = limit;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    if !strategies.is_empty() {
        config.strategies = strategies;
    }

    let tournament = Tournament::new(StrategyRegistry::builtin(), config)?;
    let summary = tournament.run()?;

    summary.print_report();
    println!("Games saved to {}", tournament.config().output_dir.display());
    println!("Summary saved to {}", tournament.summary_path().display());
    Ok(())
}

fn run_match(
    white: &str,
    black: &str,
    move_timeout: f64,
    move_limit: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    check_match_limits(move_timeout, move_limit)?;

    let registry = StrategyRegistry::builtin();
    let (white_bot, black_bot) = match seed {
        Some(seed) => (
            registry.create_seeded(white, seed)?,
            registry.create_seeded(black, seed.wrapping_add(1))?,
        ),
        None => (registry.create(white)?, registry.create(black)?),
    };

    let runner = MatchRunner::new(MatchConfig {
        move_timeout: Duration::from_secs_f64(move_timeout),
        move_limit,
        ..Default::default()
    });
    let played = runner
        .play(white_bot, black_bot)
        .context("match could not be played")?;

    let record = MatchRecord::new(
        &played,
        "Single Match",
        "Local Tournament",
        Local::now().date_naive(),
        1,
        move_timeout,
    );
    println!("{}", record.to_pgn());
    println!(
        "{} vs {}: {} ({}, {} plies)",
        played.white,
        played.black,
        played.result.result_code(),
        played.result.reason,
        played.moves.len()
    );
    if let Some((side, fault)) = played.fault() {
        println!("{side} forfeited: {fault}");
    }
    Ok(())
}

fn list_strategies() -> anyhow::Result<()> {
    let registry = StrategyRegistry::builtin();
    println!("{:<14} Name", "Id");
    for id in registry.ids() {
        println!("{:<14} {}", id, registry.display_name(id)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rounds,
            move_timeout,
            move_limit,
            seed,
            output,
            strategies,
        } => run_tournament(config, rounds, move_timeout, move_limit, seed, output, strategies),
        Commands::Match {
            white,
            black,
            move_timeout,
            move_limit,
            seed,
        } => run_match(&white, &black, move_timeout, move_limit, seed),
        Commands::List => list_strategies(),
    }
}
