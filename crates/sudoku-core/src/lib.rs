//! Core data structures for generalized Sudoku-style Latin-square puzzles.
//!
//! This crate provides the constraint-propagation primitives shared by the solver and
//! generator crates: a bitset "color" algebra ([`ColorSet`]), the four standard unit
//! heuristics (cross-hatching, lone number, naked subset, hidden subset, in
//! [`heuristics`]), a size-generic [`Grid`] with a convergence driver, and the
//! [`Choice`] type used to branch a backtracking search.
//!
//! # Supported sizes
//!
//! Grids come in eight sizes, every perfect square from 1 to 64: see [`grid::VALID_SIZES`].
//! A size-N grid has block structure √N × √N.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{ColorSet, Grid};
//!
//! let mut grid = Grid::allocate(9).unwrap();
//! grid.set_cell(0, 0, '5');
//! assert_eq!(grid.color_at(0, 0), ColorSet::singleton(4));
//! assert!(grid.is_consistent());
//! ```
//!
//! Running constraint propagation to a fixed point:
//!
//! ```
//! use sudoku_core::{ConvergenceStatus, Grid};
//!
//! let mut grid = Grid::allocate(4).unwrap();
//! grid.set_cell(0, 0, '1');
//! grid.set_cell(0, 1, '2');
//! grid.set_cell(0, 2, '3');
//! grid.set_cell(0, 3, '4');
//! match grid.converge() {
//!     ConvergenceStatus::Solved => println!("solved by propagation alone"),
//!     ConvergenceStatus::ConsistentNotSolved => println!("needs backtracking"),
//!     ConvergenceStatus::NotConsistent => println!("no solution"),
//! }
//! ```

mod choice;
mod color;
mod error;
mod grid;
pub mod heuristics;

pub use self::{
    choice::{Choice, choose},
    color::{ColorSet, ColorSetIter},
    error::GridError,
    grid::{
        ALPHABET, ConvergenceStatus, EMPTY_CELL, Grid, Unit, VALID_SIZES, char_for_color,
        color_for_char,
    },
};
