//! Backtracking solver for the Suji sudoku engine.
//!
//! This crate implements the constraint checks and the depth-first
//! backtracking search over a [`DigitGrid`](suji_core::DigitGrid):
//!
//! - [`is_valid_placement`]: pure row/column/box validity check.
//! - [`BacktrackingSolver`]: in-place solve in row-major order with
//!   ascending candidates; givens are never rewritten.
//! - [`SolveOutcome`]: tri-state result distinguishing a found solution,
//!   genuine infeasibility, and an embedder abort.
//! - [`CancelToken`]: cooperative flag letting another thread abort a
//!   running solve within one search step.
//! - [`SearchObserver`]: synchronous per-placement hooks so a
//!   presentation layer can render search progress; the engine itself
//!   never pauses.
//!
//! # Examples
//!
//! ```
//! use suji_core::DigitGrid;
//! use suji_solver::{BacktrackingSolver, SolveOutcome};
//!
//! let mut grid: DigitGrid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! let solver = BacktrackingSolver::new();
//! assert_eq!(solver.solve(&mut grid), SolveOutcome::Solved);
//! assert!(grid.is_solved());
//! # Ok::<(), suji_core::ParseGridError>(())
//! ```

mod cancel;
mod observer;
mod solver;
mod validator;

pub use self::{
    cancel::CancelToken,
    observer::{NullObserver, SearchObserver},
    solver::{BacktrackingSolver, SolveOutcome},
    validator::is_valid_placement,
};
