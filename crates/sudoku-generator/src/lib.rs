//! Puzzle generation on top of [`sudoku_core`] and [`sudoku_solver`].
//!
//! [`generate`] produces a puzzle of a given size: it solves a randomly seeded full grid,
//! then blanks cells back out, either unconditionally ([`GeneratorMode::First`]) or while
//! re-verifying a unique solution after every blank ([`GeneratorMode::Unique`]).
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use sudoku_generator::{GeneratorConfig, GeneratorMode, generate};
//!
//! let mut rng = Pcg64::seed_from_u64(0);
//! let puzzle = generate(9, GeneratorMode::First, GeneratorConfig::default(), &mut rng).unwrap();
//! println!("{puzzle}");
//! ```
//!
//! Generating a puzzle guaranteed to have a unique solution takes longer (every candidate
//! blank is re-solved in `all` mode to confirm it doesn't introduce a second completion),
//! so generation for larger grids typically uses a lower `empty_rate`:
//!
//! ```
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use sudoku_generator::{GeneratorConfig, GeneratorMode, generate};
//!
//! let mut rng = Pcg64::seed_from_u64(0);
//! let config = GeneratorConfig { empty_rate: 0.3 };
//! let puzzle = generate(9, GeneratorMode::Unique, config, &mut rng).unwrap();
//! println!("{puzzle}");
//! ```

mod generator;

pub use self::generator::{DEFAULT_EMPTY_RATE, GeneratorConfig, GeneratorMode, generate};
