//! Puzzle generation for the Suji sudoku engine.
//!
//! Generation has two phases, both driven by a single seeded random
//! stream:
//!
//! 1. [`fill_grid`] constructs a complete valid solution by backtracking
//!    with a per-cell shuffled candidate order.
//! 2. [`remove_clues`] clears a configured number of uniformly chosen
//!    cells. Removal only deletes information, so the remaining clue set
//!    is always solvable; uniqueness of the solution is not guaranteed.
//!
//! [`PuzzleGenerator`] packages the two phases behind [`PuzzleSeed`]s, so
//! any puzzle can be reproduced from its printed seed, or from a phrase:
//!
//! ```
//! use suji_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("launch puzzle"));
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.filled_count(), 41);
//! println!("{}", puzzle.seed); // reproduces the puzzle anywhere
//! ```

mod generator;
mod seed;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator, fill_grid, remove_clues},
    seed::{ParseSeedError, PuzzleSeed},
};
