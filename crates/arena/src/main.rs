//! Arena CLI
//!
//! Plays maze games with the configured agents and reports the results.

use std::path::PathBuf;

use agent_core::AgentKind;
use anyhow::{Context, Result};
use arena::{ArenaConfig, ArenaResults, GameRunner, LayoutSource};
use clap::{Args, Parser, Subcommand};
use maze_core::HeuristicKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arena")]
#[command(version, about = "Evaluate search agents on maze layouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every agent from a config file and report the results
    Run(RunArgs),

    /// Play a single game with one agent
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Arena config (TOML)
    #[arg(long, short = 'c')]
    config: PathBuf,

    /// Write results as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Agent to play: random, greedy, bfs, dfs or astar
    #[arg(long, short = 'a')]
    agent: AgentKind,

    /// Layout file (defaults to the built-in small maze)
    #[arg(long, short = 'l')]
    layout: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "food")]
    heuristic: HeuristicKind,

    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Successor generations allowed per turn
    #[arg(long, default_value_t = 100)]
    successor_budget: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Play(args) => play(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = ArenaConfig::load(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    let runner = GameRunner::from_config(config)?;
    info!(
        agents = runner.config().agents.len(),
        games = runner.config().games,
        width = runner.game().layout().width(),
        height = runner.game().layout().height(),
        "arena starting"
    );

    let results = runner.run_all()?;
    results.print_report();

    if let Some(out) = args.out {
        results
            .save(&out)
            .with_context(|| format!("saving results to {}", out.display()))?;
        info!(path = %out.display(), "results saved");
    }
    Ok(())
}

fn play(args: PlayArgs) -> Result<()> {
    let layout = match args.layout {
        Some(path) => LayoutSource::Path(path),
        None => LayoutSource::default(),
    };
    let config = ArenaConfig {
        agents: vec![args.agent],
        games: 1,
        max_turns: args.max_turns,
        seed: args.seed,
        successor_budget: args.successor_budget,
        heuristic: args.heuristic,
        layout,
        ..Default::default()
    };
    let runner = GameRunner::from_config(config).context("preparing game")?;
    let run = runner.run_agent(args.agent)?;

    let mut results = ArenaResults::new(runner.config().clone());
    results.runs.push(run);
    results.print_report();
    Ok(())
}
