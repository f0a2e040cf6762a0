use rand::prelude::{Rng, SliceRandom};
use strum::IntoEnumIterator;
use tracing::trace;

use crate::sudoku::grid::{Digit, Grid};

/// Default attempt cap for [`try_solve_random`]. The randomized strategy
/// never backtracks, so unsolvable grids would otherwise retry forever.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Depth-first backtracking search. Fills the first empty cell in row-major
/// order, trying candidate digits in ascending order; every trial grid is
/// re-checked against the full row/column/box invariant before recursing.
///
/// Returns the first solution found, or `None` when the search space is
/// exhausted. A grid that already violates the invariant cannot be repaired
/// by adding digits, so it terminates immediately.
pub fn solve(grid: &Grid) -> Option<Grid> {
    trace!(grid = %grid, "search step");

    let Some((row, column)) = grid.first_empty() else {
        // Full grid: a solution only if the invariant actually holds.
        return grid.is_valid().then_some(*grid);
    };

    Digit::iter()
        .map(|digit| grid.with(row, column, digit))
        .filter(Grid::is_valid)
        .find_map(|trial| solve(&trial))
}

/// Randomized single-path descent: at each empty cell, pick one of the valid
/// candidate grids uniformly at random and commit to it. There is no
/// backtracking across candidates; a dead end ends the whole attempt with
/// `None`.
pub fn solve_random(grid: &Grid, rng: &mut impl Rng) -> Option<Grid> {
    trace!(grid = %grid, "random search step");

    let Some((row, column)) = grid.first_empty() else {
        return grid.is_valid().then_some(*grid);
    };

    let candidates: Vec<Grid> = Digit::iter()
        .map(|digit| grid.with(row, column, digit))
        .filter(Grid::is_valid)
        .collect();

    let trial = candidates.choose(rng)?;
    solve_random(trial, rng)
}

/// Re-run [`solve_random`] from the same starting grid, with fresh random
/// choices each time, until an attempt succeeds or `max_attempts` runs out.
/// The cap is mandatory: grids with no solution would never terminate.
pub fn try_solve_random(grid: &Grid, rng: &mut impl Rng, max_attempts: usize) -> Option<Grid> {
    (0..max_attempts).find_map(|attempt| {
        trace!(attempt, "randomized attempt");
        solve_random(grid, rng)
    })
}
