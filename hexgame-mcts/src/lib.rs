//! Hexgame MCTS - Monte Carlo move selection
//!
//! This crate provides flat Monte Carlo evaluation for Hex:
//! - Random fill-out of the remaining cells (rollout)
//! - Per-candidate win tallies and argmax move choice
//! - Optional rayon parallelism across candidates (`parallel` feature)

pub mod rollout;
pub mod evaluator;

use std::time::Duration;

pub use evaluator::{CandidateStats, Evaluation, MonteCarloRollout};
pub use rollout::{fill_order, random_fill, rollout};

/// Rollout evaluator configuration
#[derive(Clone, Debug, PartialEq)]
pub struct RolloutConfig {
    /// Random fill-outs per candidate cell
    pub trials: u32,
    /// Wall-clock budget for one move, split evenly across candidates
    pub time_limit: Option<Duration>,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            time_limit: None,
            seed: None,
        }
    }
}

impl RolloutConfig {
    /// Create config with the given number of trials per candidate
    pub fn new(trials: u32) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    /// Cap the time spent on one move
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RolloutConfig::default();
        assert_eq!(config.trials, 1000);
        assert!(config.time_limit.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = RolloutConfig::new(50)
            .with_seed(7)
            .with_time_limit(Duration::from_millis(250));
        assert_eq!(config.trials, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
    }
}
