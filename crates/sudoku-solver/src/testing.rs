//! Test-only grid construction helpers shared by this crate's test modules.

use sudoku_core::{ColorSet, Grid};

/// A canonical valid solution for a `size`-cell grid with block size `b = sqrt(size)`.
///
/// Uses the standard `(b*(r%b) + r/b + c) % size` base pattern, which is guaranteed to put
/// every color exactly once in every row, column, and block for any valid Sudoku size.
pub(crate) fn canonical_solution(size: usize) -> Grid {
    let block_size = (size as f64).sqrt().round() as usize;
    let mut grid = Grid::allocate(size).unwrap();
    for r in 0..size {
        for c in 0..size {
            let color = (block_size * (r % block_size) + r / block_size + c) % size;
            grid.set_color_at(r, c, ColorSet::singleton(color));
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_solution_is_a_valid_complete_grid() {
        for &size in &sudoku_core::VALID_SIZES {
            let grid = canonical_solution(size);
            assert!(grid.is_solved());
            assert!(grid.is_consistent());
        }
    }
}
