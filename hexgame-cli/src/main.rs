//! Hexgame CLI - Command-line interface
//!
//! Commands:
//! - play: Play an interactive game against the AI or another human
//! - arena: Let two rollout AIs play each other
//! - graph: Load and inspect a graph description file

mod arena_cmd;
mod graph_cmd;
mod human;
mod play_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexgame")]
#[command(about = "Play Hex against a Monte Carlo rollout AI")]
struct Cli {
    /// Random seed for reproducible AI play
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play_cmd::PlayArgs),
    /// Run AI vs AI games
    Arena(arena_cmd::ArenaArgs),
    /// Inspect a graph description file
    Graph(graph_cmd::GraphArgs),
}

fn main() -> Result<()> {
    // stdout carries the board, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Arena(args) => arena_cmd::run(args, cli.seed),
        Commands::Graph(args) => graph_cmd::run(args),
    }
}
