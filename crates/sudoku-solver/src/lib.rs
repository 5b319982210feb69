//! Backtracking solver for [`sudoku_core::Grid`]s, with first/all/unique search modes.
//!
//! [`solve`] runs the crate's search algorithm: repeatedly propagate constraints to a fixed
//! point via [`Grid::converge`](sudoku_core::Grid::converge), and when propagation stalls,
//! branch on a [`Choice`](sudoku_core::Choice) and recurse into a deep copy of the grid for
//! each candidate color, undoing the branch on the parent before trying the next candidate.
//!
//! # Modes
//!
//! - [`Mode::First`] stops at the first solution found — the right choice for an interactive
//!   "just solve it" query.
//! - [`Mode::All`] enumerates every solution reachable from the initial grid.
//! - [`Mode::Unique`] behaves exactly like `All` (it has to enumerate to prove uniqueness);
//!   callers distinguish it only by how they interpret [`SolveOutcome::solutions`]
//!   afterward — `1` means the grid had exactly one completion.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use sudoku_core::Grid;
//! use sudoku_solver::{Mode, solve};
//!
//! let mut grid = Grid::allocate(9).unwrap();
//! grid.set_cell(0, 0, '1');
//!
//! let mut rng = Pcg64::seed_from_u64(0);
//! let outcome = solve(grid, Mode::First, None, true, &mut rng).unwrap();
//! assert!(outcome.grid.unwrap().is_solved());
//! ```
//!
//! Counting solutions to check uniqueness:
//!
//! ```
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use sudoku_core::Grid;
//! use sudoku_solver::{Mode, solve};
//!
//! let grid = Grid::allocate(4).unwrap();
//! let mut rng = Pcg64::seed_from_u64(0);
//! let outcome = solve(grid, Mode::All, None, false, &mut rng).unwrap();
//! assert_eq!(outcome.solutions, 288);
//! ```

mod backtrack;
mod error;
mod sink;

pub use self::{
    backtrack::{Mode, SolveOutcome, solve},
    error::SolverError,
    sink::{SolutionSink, WriteSink},
};

#[cfg(test)]
mod testing;
