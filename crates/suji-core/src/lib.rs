//! Core data structures for the Suji sudoku engine.
//!
//! This crate provides the grid representation shared by the solving and
//! generation crates. It contains no search logic: everything here is
//! plain data plus validity bookkeeping.
//!
//! # Overview
//!
//! - [`Digit`]: type-safe sudoku digit 1-9; an empty cell is
//!   `Option::<Digit>::None`.
//! - [`DigitSet`]: bitset of digits, used for duplicate detection within
//!   a row, column, or box.
//! - [`Position`]: board coordinate with box and row-major index
//!   conversions; [`Position::ALL`] is the row-major visit order used by
//!   the search.
//! - [`DigitGrid`]: the 9×9 grid itself, with validated construction from
//!   raw values ([`DigitGrid::from_values`]) or grid literals
//!   ([`FromStr`](std::str::FromStr)).
//!
//! # Examples
//!
//! ```
//! use suji_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Digit::D5);
//!
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! assert!(grid.is_consistent());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridError, ParseGridError},
    position::Position,
};
