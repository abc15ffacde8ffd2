//! Flat Monte Carlo move evaluation
//!
//! Every empty cell is scored by the fraction of random fill-outs the mover
//! wins after playing there; the best-scoring cell is chosen.
//!
//! ## Architecture
//! - Level 2: `MonteCarloRollout::evaluate` (candidate loop)
//! - Level 3: `evaluate_candidate` (trial loop with optional deadline)
//! - Level 4: `rollout` (single fill-out, see `crate::rollout`)

use std::time::{Duration, Instant};

use hexgame_core::{Cell, Color, HexBoard, HexError, MoveSelector, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::rollout::rollout;
use crate::RolloutConfig;

// ============================================================================
// EVALUATION RESULT
// ============================================================================

/// Trial statistics for one candidate cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateStats {
    pub cell: Cell,
    pub wins: u32,
    pub trials: u32,
}

impl CandidateStats {
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.wins as f64 / self.trials as f64
        }
    }
}

/// Statistics for every empty cell, in row-major order
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub color: Color,
    pub candidates: Vec<CandidateStats>,
}

impl Evaluation {
    /// Highest win rate; ties go to the first cell in row-major order
    pub fn best(&self) -> Option<&CandidateStats> {
        let mut best: Option<&CandidateStats> = None;
        for stats in &self.candidates {
            if best.map_or(true, |b| stats.win_rate() > b.win_rate()) {
                best = Some(stats);
            }
        }
        best
    }

    pub fn total_trials(&self) -> u64 {
        self.candidates.iter().map(|s| s.trials as u64).sum()
    }
}

// ============================================================================
// EVALUATOR
// ============================================================================

/// AI player that picks moves from random fill-out statistics
pub struct MonteCarloRollout {
    config: RolloutConfig,
    rng: ChaCha8Rng,
}

impl MonteCarloRollout {
    pub fn new(config: RolloutConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Score every empty cell for `color`
    pub fn evaluate(&mut self, board: &HexBoard, color: Color) -> Result<Evaluation> {
        debug_assert!(!color.is_empty(), "cannot evaluate moves for Empty");

        let cells: Vec<Cell> = board.empty_cells().collect();
        if cells.is_empty() {
            return Err(HexError::BoardFull);
        }

        let start = Instant::now();
        let candidates = self.evaluate_all(board, &cells, color, start)?;

        tracing::trace!(
            "evaluated {} candidates in {:?}",
            candidates.len(),
            start.elapsed()
        );
        Ok(Evaluation { color, candidates })
    }

    /// The cell with the best win rate for `color`
    pub fn best_move(&mut self, board: &HexBoard, color: Color) -> Result<Cell> {
        let evaluation = self.evaluate(board, color)?;
        let best = evaluation.best().ok_or(HexError::BoardFull)?;

        tracing::debug!(
            "{} picks {} ({}/{} wins, {} trials total)",
            color,
            best.cell,
            best.wins,
            best.trials,
            evaluation.total_trials()
        );
        Ok(best.cell)
    }

    /// Choose a move and play it on `board`
    pub fn play(&mut self, board: &mut HexBoard, color: Color) -> Result<Cell> {
        let cell = self.best_move(board, color)?;
        if board.place_cell(cell, color) {
            Ok(cell)
        } else {
            Err(HexError::IllegalMove(cell))
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(
        &mut self,
        board: &HexBoard,
        cells: &[Cell],
        color: Color,
        start: Instant,
    ) -> Result<Vec<CandidateStats>> {
        let trials = self.config.trials;
        let time_limit = self.config.time_limit;

        cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| {
                let deadline = candidate_deadline(start, time_limit, i, cells.len());
                evaluate_candidate(board, cell, color, trials, deadline, &mut self.rng)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(
        &mut self,
        board: &HexBoard,
        cells: &[Cell],
        color: Color,
        start: Instant,
    ) -> Result<Vec<CandidateStats>> {
        use rayon::prelude::*;

        let trials = self.config.trials;
        let time_limit = self.config.time_limit;
        let base_seed: u64 = self.rng.gen();

        cells
            .par_iter()
            .enumerate()
            .map(|(i, &cell)| {
                // Each candidate gets a unique seed based on index
                let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(i as u64));
                let deadline = candidate_deadline(start, time_limit, i, cells.len());
                evaluate_candidate(board, cell, color, trials, deadline, &mut rng)
            })
            .collect()
    }
}

impl MoveSelector for MonteCarloRollout {
    fn name(&self) -> &str {
        "monte-carlo"
    }

    fn select_move(&mut self, board: &HexBoard, color: Color) -> Result<Cell> {
        self.best_move(board, color)
    }
}

// ============================================================================
// TRIAL LOOP
// ============================================================================

/// Run trials for one candidate until the count or the deadline is reached
///
/// At least one trial always runs.
fn evaluate_candidate<R: Rng + ?Sized>(
    board: &HexBoard,
    cell: Cell,
    color: Color,
    trials: u32,
    deadline: Option<Instant>,
    rng: &mut R,
) -> Result<CandidateStats> {
    let mut stats = CandidateStats {
        cell,
        wins: 0,
        trials: 0,
    };

    while stats.trials < trials.max(1) {
        if stats.trials > 0 && deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
        if rollout(board, cell, color, rng)? {
            stats.wins += 1;
        }
        stats.trials += 1;
    }

    Ok(stats)
}

/// End of candidate `index`'s share of the move budget
fn candidate_deadline(
    start: Instant,
    time_limit: Option<Duration>,
    index: usize,
    count: usize,
) -> Option<Instant> {
    time_limit.map(|limit| start + limit * (index as u32 + 1) / count as u32)
}
