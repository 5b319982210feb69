//! Puzzle construction: a random solved grid with cells blanked back out.

use rand::{Rng, seq::SliceRandom};
use sudoku_core::{ColorSet, Grid, GridError};
use sudoku_solver::Mode as SolveMode;

/// The fraction of cells a freshly generated puzzle leaves blank, unless overridden via
/// [`GeneratorConfig::empty_rate`].
pub const DEFAULT_EMPTY_RATE: f64 = 0.6;

/// Which blanking strategy [`generate`] should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorMode {
    /// Blank the target number of cells unconditionally, without checking whether the
    /// resulting puzzle still has a unique solution.
    First,
    /// Blank cells one at a time, keeping only the ones that preserve a unique solution.
    /// Slower than [`First`](Self::First) (it re-solves the puzzle once per candidate
    /// blank) but guarantees the output has exactly one completion.
    Unique,
}

/// Tunable parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// The fraction of the grid's N² cells to try to leave blank, in `(0, 1)`.
    pub empty_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            empty_rate: DEFAULT_EMPTY_RATE,
        }
    }
}

/// Generates a puzzle of the given size: a random full solution with cells blanked back
/// out, in the given mode.
///
/// 1. A full grid is allocated and its first row seeded with a random permutation of every
///    color, then solved in [`SolveMode::First`] with random branching — this yields a
///    uniformly varied solved grid rather than always the same canonical one.
/// 2. A random permutation of all N² cell positions is drawn, determining the order cells
///    are considered for blanking.
/// 3. [`GeneratorMode::First`] blanks the first `⌊N² · empty_rate⌋` positions in that order
///    unconditionally. [`GeneratorMode::Unique`] instead blanks positions one at a time,
///    keeping a blank only if re-solving in [`SolveMode::All`] still reports exactly one
///    solution, until either the target count is reached or every position has been tried.
///
/// # Errors
///
/// Returns [`GridError::InvalidSize`] if `size` is not one of
/// [`VALID_SIZES`](sudoku_core::VALID_SIZES).
pub fn generate<R>(
    size: usize,
    mode: GeneratorMode,
    config: GeneratorConfig,
    rng: &mut R,
) -> Result<Grid, GridError>
where
    R: Rng + ?Sized,
{
    let mut grid = Grid::allocate(size)?;
    if size > 1 {
        seed_first_row(&mut grid, rng);
    }
    let mut grid = solve_full(grid, rng);

    let mut positions: Vec<(usize, usize)> =
        (0..size).flat_map(|r| (0..size).map(move |c| (r, c))).collect();
    positions.shuffle(rng);

    let target = ((size * size) as f64 * config.empty_rate).floor() as usize;
    match mode {
        GeneratorMode::First => blank_unconditionally(&mut grid, &positions, target),
        GeneratorMode::Unique => blank_preserving_uniqueness(&mut grid, &positions, target, rng),
    }
    Ok(grid)
}

fn seed_first_row<R>(grid: &mut Grid, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let size = grid.size();
    let mut colors: Vec<usize> = (0..size).collect();
    colors.shuffle(rng);
    for (column, color) in colors.into_iter().enumerate() {
        grid.set_color_at(0, column, ColorSet::singleton(color));
    }
}

/// Solves `grid` to completion with random branching. The grid handed in is always
/// consistent by construction (a freshly allocated grid, or one with only its first row
/// pinned to a permutation), so this always finds a solution.
fn solve_full<R>(grid: Grid, rng: &mut R) -> Grid
where
    R: Rng + ?Sized,
{
    sudoku_solver::solve(grid, SolveMode::First, None, true, rng)
        .expect("a freshly seeded grid is always consistent")
        .grid
        .expect("a freshly seeded grid always has a solution")
}

fn blank_unconditionally(grid: &mut Grid, positions: &[(usize, usize)], target: usize) {
    let size = grid.size();
    for &(r, c) in positions.iter().take(target) {
        grid.set_color_at(r, c, ColorSet::full(size));
    }
}

fn blank_preserving_uniqueness<R>(
    grid: &mut Grid,
    positions: &[(usize, usize)],
    target: usize,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    let size = grid.size();
    let mut remaining = target;
    for &(r, c) in positions {
        if remaining == 0 {
            break;
        }
        let mut probe = grid.clone();
        probe.set_color_at(r, c, ColorSet::full(size));
        let outcome = sudoku_solver::solve(probe, SolveMode::All, None, false, rng)
            .expect("blanking a single cell of a consistent grid keeps it consistent");
        if outcome.solutions == 1 {
            grid.set_color_at(r, c, ColorSet::full(size));
            remaining -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use sudoku_solver::{Mode, solve};

    use super::*;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(7)
    }

    #[test]
    fn rejects_invalid_size() {
        let result = generate(5, GeneratorMode::First, GeneratorConfig::default(), &mut rng());
        assert_eq!(result, Err(GridError::InvalidSize(5)));
    }

    #[test]
    fn first_mode_blanks_exactly_the_target_count() {
        let size = 9;
        let config = GeneratorConfig::default();
        let grid = generate(size, GeneratorMode::First, config, &mut rng()).unwrap();
        let expected_blanks = ((size * size) as f64 * config.empty_rate).floor() as usize;
        let blanks = (0..size)
            .flat_map(|r| (0..size).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.color_at(r, c) == ColorSet::full(size))
            .count();
        assert_eq!(blanks, expected_blanks);
    }

    #[test]
    fn unique_mode_produces_a_puzzle_with_exactly_one_completion() {
        let size = 9;
        let config = GeneratorConfig {
            empty_rate: 0.1,
        };
        let grid = generate(size, GeneratorMode::Unique, config, &mut rng()).unwrap();
        let outcome = solve(grid, Mode::All, None, false, &mut rng()).unwrap();
        assert_eq!(outcome.solutions, 1);
    }

    #[test]
    fn generated_grid_is_always_consistent() {
        for &size in &[1, 4, 9] {
            let grid = generate(size, GeneratorMode::First, GeneratorConfig::default(), &mut rng())
                .unwrap();
            assert!(grid.is_consistent());
        }
    }

    #[test]
    fn size_one_generates_its_single_solved_cell() {
        let grid = generate(1, GeneratorMode::First, GeneratorConfig::default(), &mut rng())
            .unwrap();
        assert!(grid.is_solved());
    }
}
