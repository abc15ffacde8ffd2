//! Arena command - rollout AI against rollout AI
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_arena(), report_results()
//! - Level 3: play_single_game(), compute_arena_statistics()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use hexgame_core::{Color, Game, GameRecord, HexBoard};
use hexgame_mcts::{MonteCarloRollout, RolloutConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ArenaArgs {
    /// Board dimension (1-20)
    #[arg(long, default_value = "5")]
    pub size: usize,

    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Rollouts per candidate cell for Blue
    #[arg(long, default_value = "200")]
    pub blue_trials: u32,

    /// Rollouts per candidate cell for Red
    #[arg(long, default_value = "200")]
    pub red_trials: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Aggregated arena results
#[derive(Clone, Debug, Serialize)]
struct ArenaResults {
    total_games: usize,
    blue_wins: usize,
    red_wins: usize,
    avg_moves: f32,
    games: Vec<GameRecord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run arena command
pub fn run(args: ArenaArgs, seed: Option<u64>) -> Result<()> {
    HexBoard::validated(args.size).context("Invalid board size")?;

    tracing::info!(
        "Starting arena: {} games on {}x{} (blue {} trials, red {} trials)",
        args.games,
        args.size,
        args.size,
        args.blue_trials,
        args.red_trials
    );

    let base_seed = seed.unwrap_or_else(rand::random);
    let results = play_arena(&args, base_seed)?;

    report_results(&results, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_arena(args: &ArenaArgs, base_seed: u64) -> Result<ArenaResults> {
    let progress = ProgressBar::new(args.games as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games ({elapsed})")
            .context("Invalid progress template")?,
    );

    let mut games = Vec::with_capacity(args.games);
    for game_num in 0..args.games {
        let record = play_single_game(args, base_seed.wrapping_add(game_num as u64))
            .with_context(|| format!("Game {} failed", game_num + 1))?;

        tracing::debug!(
            "Game {}: {} wins ({} moves)",
            game_num + 1,
            record.winner,
            record.moves.len()
        );
        games.push(record);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(compute_arena_statistics(games))
}

fn report_results(results: &ArenaResults, args: &ArenaArgs) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(results).context("Failed to encode results")?;
        println!("{}", json);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game; Red's seed is offset so both sides play differently
fn play_single_game(args: &ArenaArgs, seed: u64) -> hexgame_core::Result<GameRecord> {
    let mut blue = MonteCarloRollout::new(RolloutConfig::new(args.blue_trials).with_seed(seed));
    let mut red = MonteCarloRollout::new(
        RolloutConfig::new(args.red_trials).with_seed(seed.wrapping_add(1000)),
    );

    let mut game = Game::new(HexBoard::new(args.size));
    game.play(&mut blue, &mut red)
}

fn compute_arena_statistics(games: Vec<GameRecord>) -> ArenaResults {
    let blue_wins = games.iter().filter(|g| g.winner == Color::Blue).count();
    let red_wins = games.iter().filter(|g| g.winner == Color::Red).count();

    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    ArenaResults {
        total_games: games.len(),
        blue_wins,
        red_wins,
        avg_moves,
        games,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percentage(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(results: &ArenaResults) {
    let total = results.total_games;

    println!("\n=== Arena Results ===");
    println!("Total games: {}", total);
    println!(
        "Blue wins:   {} ({:.1}%)",
        results.blue_wins,
        percentage(results.blue_wins, total)
    );
    println!(
        "Red wins:    {} ({:.1}%)",
        results.red_wins,
        percentage(results.red_wins, total)
    );
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for (i, game) in results.games.iter().enumerate() {
        println!("  Game {}: {} in {} moves", i + 1, game.winner, game.moves.len());
    }
}
