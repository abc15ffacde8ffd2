//! Play command - interactive game on the terminal

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use hexgame_core::{Color, Game, GameRecord, HexBoard, MoveSelector};
use hexgame_mcts::{MonteCarloRollout, RolloutConfig};

use crate::human::HumanPrompt;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

/// Which side the AI takes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AiSide {
    /// AI plays Blue and moves first
    Blue,
    /// AI plays Red
    Red,
    /// Two humans share the terminal
    None,
}

#[derive(Args)]
pub struct PlayArgs {
    /// Board dimension (1-20)
    #[arg(long, default_value = "7")]
    pub size: usize,

    /// Side played by the AI
    #[arg(long, value_enum, default_value = "red")]
    pub ai: AiSide,

    /// Rollouts per candidate cell
    #[arg(long, default_value = "1000")]
    pub trials: u32,

    /// Time budget per AI move in milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,
}

impl PlayArgs {
    pub fn rollout_config(&self, seed: Option<u64>) -> RolloutConfig {
        let mut config = RolloutConfig::new(self.trials);
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        config
    }
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let board = HexBoard::validated(args.size).context("Invalid board size")?;

    let mut human = HumanPrompt::new(io::stdin().lock(), io::stdout());
    let mut ai = MonteCarloRollout::new(args.rollout_config(seed));
    let mut game = Game::new(board);

    tracing::info!(
        "Starting {}x{} game (AI: {:?}, {:?})",
        args.size,
        args.size,
        args.ai,
        ai.config()
    );

    let record = match args.ai {
        AiSide::Blue => game.play(&mut ai, &mut human),
        AiSide::Red => game.play(&mut human, &mut ai),
        AiSide::None => play_hot_seat(&mut game, &mut human),
    }
    .context("Game aborted")?;

    tracing::info!("Game over after {} moves", game.moves().len());
    println!("\n{}", game.board());
    println!("{}", outcome_message(record.winner, args.ai));
    Ok(())
}

/// Both colors are entered at the same prompt
fn play_hot_seat(
    game: &mut Game,
    human: &mut dyn MoveSelector,
) -> hexgame_core::Result<GameRecord> {
    while !game.is_over() {
        game.play_turn(human)?;
    }
    Ok(game.record())
}

// ============================================================================
// UTILITIES
// ============================================================================

fn outcome_message(winner: Color, ai: AiSide) -> String {
    let ai_color = match ai {
        AiSide::Blue => Color::Blue,
        AiSide::Red => Color::Red,
        AiSide::None => return format!("{winner} player wins! Congratulations!"),
    };
    if winner == ai_color {
        "You lost the game. Better luck next time.".to_string()
    } else {
        "You win! Congratulations!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_message() {
        assert_eq!(
            outcome_message(Color::Red, AiSide::None),
            "Red player wins! Congratulations!"
        );
        assert_eq!(
            outcome_message(Color::Blue, AiSide::Blue),
            "You lost the game. Better luck next time."
        );
        assert_eq!(
            outcome_message(Color::Blue, AiSide::Red),
            "You win! Congratulations!"
        );
    }

    #[test]
    fn test_rollout_config_from_args() {
        let args = PlayArgs {
            size: 5,
            ai: AiSide::Red,
            trials: 250,
            time_limit_ms: Some(1500),
        };
        let config = args.rollout_config(Some(3));
        assert_eq!(config.trials, 250);
        assert_eq!(config.time_limit, Some(Duration::from_millis(1500)));
        assert_eq!(config.seed, Some(3));
    }
}
