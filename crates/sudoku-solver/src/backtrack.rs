//! Recursive backtracking search over [`Grid`] choices.

use rand::Rng;
use sudoku_core::{ConvergenceStatus, Grid, choose};

use crate::{SolutionSink, SolverError};

/// Which solutions a [`solve`] call should search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Stop at the first solution found.
    First,
    /// Enumerate every solution; the search never returns early.
    All,
    /// Enumerate every solution, same as [`All`](Mode::All). Distinguished from `All` only
    /// by caller intent: a generator uses this mode to certify a unique completion by
    /// inspecting [`SolveOutcome::solutions`] after the search finishes.
    Unique,
}

impl Mode {
    const fn stops_at_first(self) -> bool {
        matches!(self, Self::First)
    }

    const fn remembers_last(self) -> bool {
        matches!(self, Self::All | Self::Unique)
    }
}

/// The result of a [`solve`] call: the witness solution found (if any), and how many
/// solutions the search actually reached.
///
/// In `first` mode, `solutions` is `1` if a solution was found and `0` otherwise. In `all`
/// or `unique` mode, `solutions` is the true count of solutions reachable from the initial
/// grid, and `grid` is the last one found (an arbitrary witness among possibly many).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// A witness solution, or `None` if the search found none.
    pub grid: Option<Grid>,
    /// How many SOLVED grids the search reached.
    pub solutions: usize,
}

impl SolveOutcome {
    const fn none() -> Self {
        Self {
            grid: None,
            solutions: 0,
        }
    }
}

/// Runs the backtracking search described by the crate's search algorithm: propagate
/// constraints to a fixed point, and if still unsolved, branch on a [`Choice`][c] and
/// recurse on a deep copy of the grid for each candidate color.
///
/// `sink`, if present, receives every SOLVED grid the search reaches (not just the witness
/// ultimately returned) — this matters in `all`/`unique` mode, where many solutions may be
/// found. `random` selects the branching rule: `true` picks a uniformly random candidate
/// color per choice (the right setting for puzzle generation, which wants varied output);
/// `false` always picks the lowest-numbered candidate, giving reproducible search order.
///
/// # Errors
///
/// Returns [`SolverError::Inconsistent`] if `grid` fails the consistency check before any
/// branching occurs — this is the only point at which inconsistency is reported as an
/// error; contradictions discovered mid-search are ordinary branch-pruning and are folded
/// into [`SolveOutcome`] instead.
///
/// [c]: sudoku_core::Choice
pub fn solve<R>(
    grid: Grid,
    mode: Mode,
    mut sink: Option<&mut dyn SolutionSink>,
    random: bool,
    rng: &mut R,
) -> Result<SolveOutcome, SolverError>
where
    R: Rng + ?Sized,
{
    if !grid.is_consistent() {
        return Err(SolverError::Inconsistent);
    }
    let mut solutions = 0;
    let witness = solve_inner(grid, mode, sink.as_deref_mut(), random, rng, &mut solutions);
    Ok(SolveOutcome {
        grid: witness,
        solutions,
    })
}

fn solve_inner<R>(
    mut grid: Grid,
    mode: Mode,
    mut sink: Option<&mut dyn SolutionSink>,
    random: bool,
    rng: &mut R,
    solutions: &mut usize,
) -> Option<Grid>
where
    R: Rng + ?Sized,
{
    match grid.converge() {
        ConvergenceStatus::NotConsistent => return None,
        ConvergenceStatus::Solved => {
            *solutions += 1;
            if let Some(sink) = sink.as_deref_mut() {
                sink.record(&grid);
            }
            return Some(grid);
        }
        ConvergenceStatus::ConsistentNotSolved => {}
    }

    let mut choice = choose(&grid, rng, random);
    let mut last = None;
    while !choice.is_empty() {
        let mut branch = grid.clone();
        choice.apply(&mut branch);
        let result = solve_inner(branch, mode, sink.as_deref_mut(), random, rng, solutions);
        if let Some(solved) = result {
            if mode.stops_at_first() {
                return Some(solved);
            }
            last = Some(solved);
        }
        choice.discard(&mut grid);
        if !grid.is_consistent() {
            return if mode.stops_at_first() { None } else { last };
        }
        choice = choose(&grid, rng, random);
    }
    if mode.remembers_last() { last } else { None }
}
