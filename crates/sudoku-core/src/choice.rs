//! A single speculative assignment, used by the backtracking search.

use rand::Rng;

use crate::{ColorSet, Grid};

/// A candidate assignment of one color to one cell, used to branch the backtracking
/// search at a cell that constraint propagation could not determine on its own.
///
/// A `Choice` is empty when [`choose`] finds no non-singleton cell left to branch on
/// (meaning the grid is already solved).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    row: usize,
    column: usize,
    colors: ColorSet,
}

impl Choice {
    /// Returns whether this choice has no color to try, meaning there was no
    /// non-singleton cell left to branch on.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Pins this choice's cell to its chosen color.
    pub fn apply(&self, grid: &mut Grid) {
        grid.set_color_at(self.row, self.column, self.colors);
    }

    /// Removes this choice's color from the candidates of its cell, undoing a branch that
    /// led to a dead end.
    pub fn discard(&self, grid: &mut Grid) {
        let remaining = grid.color_at(self.row, self.column).difference(self.colors);
        grid.set_color_at(self.row, self.column, remaining);
    }

    /// Resets this choice's cell back to the full candidate set.
    pub fn blank(&self, grid: &mut Grid) {
        grid.set_color_at(self.row, self.column, ColorSet::full(grid.size()));
    }
}

/// Selects the next cell to branch the search on: the first non-singleton cell in
/// row-major order.
///
/// When `random` is `false`, the choice's color is the lowest-numbered remaining
/// candidate, giving deterministic search order. When `random` is `true`, the color is
/// drawn uniformly from the remaining candidates using `rng`.
///
/// Returns an empty [`Choice`] if every cell is already a singleton.
#[must_use]
pub fn choose<R: Rng + ?Sized>(grid: &Grid, rng: &mut R, random: bool) -> Choice {
    for row in 0..grid.size() {
        for column in 0..grid.size() {
            let cell = grid.color_at(row, column);
            if cell.is_singleton() {
                continue;
            }
            let colors = if random {
                cell.pick_random(rng)
            } else {
                cell.leftmost()
            };
            return Choice { row, column, colors };
        }
    }
    Choice {
        row: 0,
        column: 0,
        colors: ColorSet::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn choose_finds_first_non_singleton_in_row_major_order() {
        let mut grid = Grid::allocate(4).unwrap();
        grid.set_cell(0, 0, '1');
        let mut rng = Pcg64::seed_from_u64(0);
        let choice = choose(&grid, &mut rng, false);
        assert!(!choice.is_empty());
        assert_eq!((choice.row, choice.column), (0, 1));
    }

    #[test]
    fn choose_on_fully_solved_grid_is_empty() {
        let mut grid = Grid::allocate(1).unwrap();
        grid.set_cell(0, 0, '1');
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(choose(&grid, &mut rng, false).is_empty());
    }

    #[test]
    fn apply_then_discard_restores_the_complement() {
        let mut grid = Grid::allocate(4).unwrap();
        let before = grid.color_at(0, 0);
        let mut rng = Pcg64::seed_from_u64(1);
        let choice = choose(&grid, &mut rng, false);
        choice.apply(&mut grid);
        assert_eq!(grid.color_at(0, 0), choice.colors);
        choice.discard(&mut grid);
        assert_eq!(grid.color_at(0, 0), before.difference(choice.colors));
    }

    #[test]
    fn blank_resets_to_full() {
        let mut grid = Grid::allocate(4).unwrap();
        grid.set_cell(0, 0, '1');
        let choice = Choice {
            row: 0,
            column: 0,
            colors: ColorSet::singleton(0),
        };
        choice.blank(&mut grid);
        assert_eq!(grid.color_at(0, 0), ColorSet::full(4));
    }
}
