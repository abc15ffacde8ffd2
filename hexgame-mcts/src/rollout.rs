//! Random fill-out of a Hex board
//!
//! Hex cannot end in a draw, so filling every empty cell in any order gives a
//! decided game. A rollout fills the board with an alternating color sequence
//! in shuffled order instead of simulating turn by turn.

use hexgame_core::{Cell, Color, HexBoard, HexError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Colors for `remaining` cells when `color` has just moved
///
/// The opponent takes the even slots, `color` the odd ones.
pub fn fill_order(remaining: usize, color: Color) -> Vec<Color> {
    let opponent = color.opponent();
    (0..remaining)
        .map(|i| if i % 2 == 0 { opponent } else { color })
        .collect()
}

/// Fill every empty cell, as if `color` had made the last move
pub fn random_fill<R: Rng + ?Sized>(board: &mut HexBoard, color: Color, rng: &mut R) {
    let empties: Vec<Cell> = board.empty_cells().collect();
    let mut colors = fill_order(empties.len(), color);
    colors.shuffle(rng);

    for (cell, c) in empties.into_iter().zip(colors) {
        let placed = board.place_cell(cell, c);
        debug_assert!(placed, "fill cell {cell} was not empty");
    }
}

/// Play `cell` for `color` on a copy of `board`, fill the rest at random,
/// and report whether `color` won
///
/// Fails with `IllegalMove` if the board rejects `cell` for `color`.
pub fn rollout<R: Rng + ?Sized>(
    board: &HexBoard,
    cell: Cell,
    color: Color,
    rng: &mut R,
) -> Result<bool> {
    let mut trial = board.clone();
    if !trial.place_cell(cell, color) {
        return Err(HexError::IllegalMove(cell));
    }
    random_fill(&mut trial, color, rng);
    Ok(trial.winner() == color)
}
