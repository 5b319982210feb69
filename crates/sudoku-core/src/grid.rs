//! The puzzle grid: storage, consistency checking, and constraint-propagation convergence.

use std::fmt::{self, Display};

use crate::{ColorSet, GridError, heuristics};

/// The grid sizes this crate supports: every perfect square from `1` to `64`.
pub const VALID_SIZES: [usize; 8] = [1, 4, 9, 16, 25, 36, 49, 64];

/// The character printed for a cell whose candidates are still the full set.
pub const EMPTY_CELL: char = '_';

/// The fixed 64-character alphabet mapping color index to printable character.
///
/// Color `0` maps to `'1'`, color `8` to `'9'`, color `9` to `'A'`, and so on through this
/// exact sequence.
pub const ALPHABET: &str =
    "123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ@abcdefghijklmnopqrstuvwxyz&*";

/// Returns the character for `color`, if `color < 64`.
#[must_use]
pub fn char_for_color(color: usize) -> Option<char> {
    ALPHABET.chars().nth(color)
}

/// Returns the color index for `ch`, if `ch` appears in [`ALPHABET`].
#[must_use]
pub fn color_for_char(ch: char) -> Option<usize> {
    ALPHABET.chars().position(|c| c == ch)
}

/// The outcome of running constraint propagation to a fixed point.
///
/// Returned by [`Grid::converge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceStatus {
    /// Every cell is a singleton and every unit is consistent: the grid is a complete
    /// solution.
    Solved,
    /// No unit has an empty cell or a color repeated between two singletons, but at least
    /// one cell still lists more than one candidate.
    ConsistentNotSolved,
    /// Some unit has an empty cell, or the same color pinned to two singleton cells: no
    /// completion of this grid can be a valid solution.
    NotConsistent,
}

/// A row, column, or block of a [`Grid`], identified by its index.
///
/// Used to enumerate the `3 * size` units that must each hold every color exactly once in
/// a solved grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// The row at the given index.
    Row(usize),
    /// The column at the given index.
    Column(usize),
    /// The block at the given index, numbered in row-major order of blocks.
    Block(usize),
}

/// A square grid of candidate sets.
///
/// `Grid` is cell-centric: indexing by `(row, column)` returns that cell's remaining
/// candidates directly, rather than asking "where can color `c` go?" the way a
/// digit-centric representation would. This matches the shape of the constraint-
/// propagation and backtracking algorithms this crate implements, which always reason
/// about one cell, row, column, or block at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    block_size: usize,
    cells: Vec<ColorSet>,
}

impl Grid {
    /// Returns whether `size` is one of the eight sizes this crate supports.
    #[must_use]
    pub fn check_size(size: usize) -> bool {
        VALID_SIZES.contains(&size)
    }

    /// Allocates a new grid of the given size, with every cell holding the full candidate
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size` is not one of
    /// [`VALID_SIZES`].
    pub fn allocate(size: usize) -> Result<Self, GridError> {
        if !Self::check_size(size) {
            return Err(GridError::InvalidSize(size));
        }
        let block_size = (size as f64).sqrt().round() as usize;
        Ok(Self {
            size,
            block_size,
            cells: vec![ColorSet::full(size); size * size],
        })
    }

    /// Returns this grid's size `N`.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns this grid's block size, the integer square root of [`size`](Self::size).
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    fn index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.size && column < self.size);
        row * self.size + column
    }

    /// Returns the candidate set at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `row` or `column` is out of bounds.
    #[must_use]
    pub fn color_at(&self, row: usize, column: usize) -> ColorSet {
        self.cells[self.index(row, column)]
    }

    /// Overwrites the candidate set at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `row` or `column` is out of bounds.
    pub fn set_color_at(&mut self, row: usize, column: usize, colors: ColorSet) {
        let i = self.index(row, column);
        self.cells[i] = colors;
    }

    /// Returns whether `ch` is a character this grid can accept: either
    /// [`EMPTY_CELL`], or a character mapping to a color below `size()`.
    #[must_use]
    pub fn check_character(&self, ch: char) -> bool {
        ch == EMPTY_CELL || color_for_char(ch).is_some_and(|c| c < self.size)
    }

    /// Sets the cell at `(row, column)` from a printable character.
    ///
    /// [`EMPTY_CELL`] sets the cell back to the full candidate set. Any other character
    /// that maps to a color within this grid's size pins the cell to that color. Out-of-
    /// bounds coordinates and characters this grid does not recognize are silently
    /// ignored, matching the external, untrusted-input nature of this operation (compare
    /// [`set_color_at`](Self::set_color_at), which is for internal, pre-validated use and
    /// panics instead).
    pub fn set_cell(&mut self, row: usize, column: usize, ch: char) {
        if row >= self.size || column >= self.size {
            return;
        }
        if ch == EMPTY_CELL {
            self.set_color_at(row, column, ColorSet::full(self.size));
        } else if let Some(color) = color_for_char(ch).filter(|&c| c < self.size) {
            self.set_color_at(row, column, ColorSet::singleton(color));
        }
    }

    /// Returns the printable candidate string for the cell at `(row, column)`.
    ///
    /// A cell still holding every candidate prints as [`EMPTY_CELL`] (unless `size() == 1`,
    /// in which case the grid's single color always prints as itself). Otherwise, the
    /// cell prints as the concatenation of the characters for each remaining candidate, in
    /// ascending order. Out-of-bounds coordinates return an empty string.
    #[must_use]
    pub fn get_cell(&self, row: usize, column: usize) -> String {
        if row >= self.size || column >= self.size {
            return String::new();
        }
        let colors = self.color_at(row, column);
        if self.size > 1 && colors == ColorSet::full(self.size) {
            return EMPTY_CELL.to_string();
        }
        colors
            .iter()
            .filter_map(char_for_color)
            .collect::<String>()
    }

    /// Returns the `(row, column)` coordinates of every cell in `unit`.
    #[must_use]
    pub fn unit_positions(&self, unit: Unit) -> Vec<(usize, usize)> {
        let size = self.size;
        let bs = self.block_size;
        match unit {
            Unit::Row(r) => (0..size).map(|c| (r, c)).collect(),
            Unit::Column(c) => (0..size).map(|r| (r, c)).collect(),
            Unit::Block(b) => {
                let start_row = (b / bs) * bs;
                let start_column = (b % bs) * bs;
                (0..size)
                    .map(|i| (start_row + i / bs, start_column + i % bs))
                    .collect()
            }
        }
    }

    /// Returns every unit of this grid: `size` rows, `size` columns, and `size` blocks.
    #[must_use]
    pub fn units(&self) -> Vec<Unit> {
        (0..self.size)
            .map(Unit::Row)
            .chain((0..self.size).map(Unit::Column))
            .chain((0..self.size).map(Unit::Block))
            .collect()
    }

    fn unit_colors(&self, positions: &[(usize, usize)]) -> Vec<ColorSet> {
        positions.iter().map(|&(r, c)| self.color_at(r, c)).collect()
    }

    fn write_unit_colors(&mut self, positions: &[(usize, usize)], colors: &[ColorSet]) {
        for (&(r, c), &colors) in positions.iter().zip(colors) {
            self.set_color_at(r, c, colors);
        }
    }

    fn unit_is_consistent(&self, unit: Unit) -> bool {
        let full = ColorSet::full(self.size);
        let mut singletons = ColorSet::EMPTY;
        let mut appeared = ColorSet::EMPTY;
        for (r, c) in self.unit_positions(unit) {
            let colors = self.color_at(r, c);
            if colors.is_empty() {
                return false;
            }
            if colors.is_singleton() {
                if colors.is_subset(singletons) {
                    return false;
                }
                singletons = singletons.union(colors);
            }
            appeared = appeared.union(colors);
        }
        appeared == full
    }

    /// Returns whether every unit of this grid is consistent: no empty cell, and no color
    /// pinned to two different singleton cells of the same unit.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.units().into_iter().all(|u| self.unit_is_consistent(u))
    }

    /// Returns whether every cell of this grid is a singleton.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.is_singleton())
    }

    /// Runs constraint propagation to a fixed point and reports the resulting status.
    ///
    /// This implements the two-level escalation described for the grid component: level 0
    /// (cross-hatching and lone-number) is cheap and runs first; level 1 (naked-subset and
    /// hidden-subset) is more expensive and only runs once level 0 stops making progress.
    /// Any progress at level 1 drops escalation back to level 0, since a level-1 narrowing
    /// can expose new level-0 opportunities. Propagation stops once a full pass at level 1
    /// makes no further change.
    ///
    /// Both heuristics within a level always run, even after the first one reports
    /// progress: the two techniques catch different shapes of deduction on the same unit,
    /// and skipping the second would silently under-propagate.
    pub fn converge(&mut self) -> ConvergenceStatus {
        if self.size == 1 {
            return ConvergenceStatus::Solved;
        }
        if !self.is_consistent() {
            return ConvergenceStatus::NotConsistent;
        }
        let units = self.units();
        let mut level = 0u8;
        while level < 2 {
            let mut changed = false;
            for &unit in &units {
                let positions = self.unit_positions(unit);
                let mut buf = self.unit_colors(&positions);
                let unit_changed = if level == 0 {
                    heuristics::apply_cheap(&mut buf)
                } else {
                    heuristics::apply_expensive(&mut buf)
                };
                if unit_changed {
                    changed = true;
                    self.write_unit_colors(&positions, &buf);
                }
            }
            if changed {
                if level == 1 {
                    level = 0;
                } else {
                    level += 1;
                }
            } else {
                level += 1;
            }
        }
        if !self.is_consistent() {
            ConvergenceStatus::NotConsistent
        } else if self.is_solved() {
            ConvergenceStatus::Solved
        } else {
            ConvergenceStatus::ConsistentNotSolved
        }
    }
}

impl Display for Grid {
    /// Renders the grid in the external print format: one line per row, each cell's
    /// candidate string separated by a space, followed by a blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for column in 0..self.size {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get_cell(row, column))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
